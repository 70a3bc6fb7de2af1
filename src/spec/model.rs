use crate::{
    derive::extract::MethodGroups,
    foundation::{
        error::{SpecModelError, SpecModelResult},
        names::TypeName,
    },
    model::{
        metadata::{
            BuilderMethodModel, DependencyInjectionHelper, PropDefaultModel, PropJavadocModel,
            SourceAnchor, SpecElementType, TagModel, TypeVariable,
        },
        method::{
            DelegateMethodModel, EventDeclarationModel, EventMethodModel, UpdateStateMethodModel,
        },
        param::{
            InjectPropModel, InterStageInputModel, PropModel, RenderDataDiffModel,
            StateParamModel, TreePropModel,
        },
    },
    spec::builder::SpecModelBuilder,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Normalized public surface of one component spec.
///
/// Built once through [`SpecModel::builder`] and read-only afterwards; every accessor is
/// side-effect free and returns the same value for the lifetime of the model.
pub struct SpecModel {
    pub(crate) spec_name: String,
    pub(crate) spec_type_name: TypeName,
    pub(crate) component_name: String,
    pub(crate) component_type_name: TypeName,
    pub(crate) component_class: Option<TypeName>,
    pub(crate) delegate_methods: Vec<DelegateMethodModel>,
    pub(crate) event_methods: Vec<EventMethodModel>,
    pub(crate) trigger_methods: Vec<EventMethodModel>,
    pub(crate) update_state_methods: Vec<UpdateStateMethodModel>,
    pub(crate) raw_props: Vec<PropModel>,
    pub(crate) props: Vec<PropModel>,
    pub(crate) raw_inject_props: Vec<InjectPropModel>,
    pub(crate) inject_props: Vec<InjectPropModel>,
    pub(crate) prop_defaults: Vec<PropDefaultModel>,
    pub(crate) type_variables: Vec<TypeVariable>,
    pub(crate) state_values: Vec<StateParamModel>,
    pub(crate) inter_stage_inputs: Vec<InterStageInputModel>,
    pub(crate) tree_props: Vec<TreePropModel>,
    pub(crate) event_declarations: Vec<EventDeclarationModel>,
    pub(crate) extra_builder_methods: Vec<BuilderMethodModel>,
    pub(crate) render_data_diffs: Vec<RenderDataDiffModel>,
    pub(crate) class_annotations: Vec<String>,
    pub(crate) tags: Vec<TagModel>,
    pub(crate) class_javadoc: String,
    pub(crate) prop_javadocs: Vec<PropJavadocModel>,
    pub(crate) is_public: bool,
    pub(crate) dependency_injection_helper: Option<DependencyInjectionHelper>,
    pub(crate) spec_element_type: SpecElementType,
    pub(crate) represented_object: SourceAnchor,
}

impl SpecModel {
    /// Start building a model.
    pub fn builder() -> SpecModelBuilder {
        SpecModelBuilder::default()
    }

    /// Simple name of the spec, e.g. `CardSpec`.
    pub fn spec_name(&self) -> &str {
        &self.spec_name
    }

    /// Qualified spec name.
    pub fn spec_type_name(&self) -> &TypeName {
        &self.spec_type_name
    }

    /// Simple name of the generated component, e.g. `Card`.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Qualified name of the generated component.
    pub fn component_type_name(&self) -> &TypeName {
        &self.component_type_name
    }

    /// Base class the generated component extends, if one was given.
    pub fn component_class(&self) -> Option<&TypeName> {
        self.component_class.as_ref()
    }

    /// Lifecycle delegate methods as authored.
    pub fn delegate_methods(&self) -> &[DelegateMethodModel] {
        &self.delegate_methods
    }

    /// Authored event methods followed by synthesized ones.
    pub fn event_methods(&self) -> &[EventMethodModel] {
        &self.event_methods
    }

    /// Trigger methods as authored.
    pub fn trigger_methods(&self) -> &[EventMethodModel] {
        &self.trigger_methods
    }

    /// State-update methods as authored.
    pub fn update_state_methods(&self) -> &[UpdateStateMethodModel] {
        &self.update_state_methods
    }

    /// The four method groups in scan order.
    pub fn method_groups(&self) -> MethodGroups<'_> {
        MethodGroups {
            delegate: &self.delegate_methods,
            event: &self.event_methods,
            trigger: &self.trigger_methods,
            update_state: &self.update_state_methods,
        }
    }

    /// Props as extracted, before dedup and cached names; diff-derived entries last.
    pub fn raw_props(&self) -> &[PropModel] {
        &self.raw_props
    }

    /// Deduplicated, renamed props: declared props first, diff-only props after.
    pub fn props(&self) -> &[PropModel] {
        &self.props
    }

    /// Deduplicated inject-props without cached names applied.
    pub fn raw_inject_props(&self) -> &[InjectPropModel] {
        &self.raw_inject_props
    }

    /// Deduplicated inject-props with cached names applied.
    pub fn inject_props(&self) -> &[InjectPropModel] {
        &self.inject_props
    }

    /// Declared prop defaults.
    pub fn prop_defaults(&self) -> &[PropDefaultModel] {
        &self.prop_defaults
    }

    /// Generic type parameters of the spec.
    pub fn type_variables(&self) -> &[TypeVariable] {
        &self.type_variables
    }

    /// State values in canonical order, diff-only state included.
    pub fn state_values(&self) -> &[StateParamModel] {
        &self.state_values
    }

    /// Inter-stage inputs in canonical order.
    pub fn inter_stage_inputs(&self) -> &[InterStageInputModel] {
        &self.inter_stage_inputs
    }

    /// Tree values in canonical order.
    pub fn tree_props(&self) -> &[TreePropModel] {
        &self.tree_props
    }

    /// Event types the component declares.
    pub fn event_declarations(&self) -> &[EventDeclarationModel] {
        &self.event_declarations
    }

    /// Extra setters for the generated builder.
    pub fn extra_builder_methods(&self) -> &[BuilderMethodModel] {
        &self.extra_builder_methods
    }

    /// Render-data diffs of delegate methods.
    pub fn render_data_diffs(&self) -> &[RenderDataDiffModel] {
        &self.render_data_diffs
    }

    /// Annotations to copy onto the generated component.
    pub fn class_annotations(&self) -> &[String] {
        &self.class_annotations
    }

    /// Marker tags of the generated component.
    pub fn tags(&self) -> &[TagModel] {
        &self.tags
    }

    /// Class-level documentation; empty when none was given.
    pub fn class_javadoc(&self) -> &str {
        &self.class_javadoc
    }

    /// Per-prop documentation.
    pub fn prop_javadocs(&self) -> &[PropJavadocModel] {
        &self.prop_javadocs
    }

    /// Whether the generated component is public.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// `true` when a dependency-injection helper was supplied.
    pub fn has_injected_dependencies(&self) -> bool {
        self.dependency_injection_helper.is_some()
    }

    /// Dependency-injection marker, if any.
    pub fn dependency_injection_helper(&self) -> Option<&DependencyInjectionHelper> {
        self.dependency_injection_helper.as_ref()
    }

    /// Shape of the spec declaration.
    pub fn spec_element_type(&self) -> SpecElementType {
        self.spec_element_type
    }

    /// Source element diagnostics about this spec are anchored to.
    pub fn represented_object(&self) -> &SourceAnchor {
        &self.represented_object
    }
}

/// Accessors that only richer model variants provide.
///
/// Each one fails with [`SpecModelError::Unsupported`] on every call.
impl SpecModel {
    fn unsupported<T>(accessor: &'static str) -> SpecModelResult<T> {
        tracing::error!(accessor, "unsupported accessor called on simplified spec model");
        Err(SpecModelError::unsupported(accessor))
    }

    /// Context type handed to delegate methods.
    pub fn context_class(&self) -> SpecModelResult<TypeName> {
        Self::unsupported("context_class")
    }

    /// Generated state container type.
    pub fn state_container_class(&self) -> SpecModelResult<TypeName> {
        Self::unsupported("state_container_class")
    }

    /// Interface used to enqueue state updates.
    pub fn update_state_interface(&self) -> SpecModelResult<TypeName> {
        Self::unsupported("update_state_interface")
    }

    /// Name of the scoping method on the context.
    pub fn scope_method_name(&self) -> SpecModelResult<String> {
        Self::unsupported("scope_method_name")
    }

    /// Whether the component accepts styles.
    pub fn is_styling_supported(&self) -> SpecModelResult<bool> {
        Self::unsupported("is_styling_supported")
    }

    /// Whether equivalence checks compare ids.
    pub fn should_check_id_in_is_equivalent_to_method(&self) -> SpecModelResult<bool> {
        Self::unsupported("should_check_id_in_is_equivalent_to_method")
    }

    /// Whether the component deep-copies on update.
    pub fn has_deep_copy(&self) -> SpecModelResult<bool> {
        Self::unsupported("has_deep_copy")
    }

    /// Whether a `has_state` override is emitted.
    pub fn should_generate_has_state(&self) -> SpecModelResult<bool> {
        Self::unsupported("should_generate_has_state")
    }

    /// Spec validation lives with the richer model variants.
    pub fn validate(&self) -> SpecModelResult<()> {
        Self::unsupported("validate")
    }

    /// Code generation lives with the richer model variants.
    pub fn generate(&self) -> SpecModelResult<String> {
        Self::unsupported("generate")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
