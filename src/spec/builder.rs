use crate::{
    derive::{
        cached_names::CachedPropNames,
        extract::{MethodGroups, diff_props, raw_props, scanned_inject_props},
        props::{dedup_inject_props, derive_props, rename_inject_props},
        synthetic::{DEFAULT_RULES, SyntheticEventRule, combined_event_methods},
        values::{
            derive_inter_stage_inputs, derive_render_data_diffs, derive_state_values,
            derive_tree_props,
        },
    },
    foundation::{
        error::{SpecModelError, SpecModelResult},
        names::{TypeName, component_type_name, simple_name},
    },
    model::{
        metadata::{
            BuilderMethodModel, DependencyInjectionHelper, PropDefaultModel, PropJavadocModel,
            SourceAnchor, SpecElementType, TagModel, TypeVariable,
        },
        method::{
            DelegateMethodModel, EventDeclarationModel, EventMethodModel, UpdateStateMethodModel,
        },
        param::{InjectPropModel, PropModel},
    },
    spec::model::SpecModel,
};

/// Accumulates spec inputs and derives a [`SpecModel`] in [`SpecModelBuilder::build`].
///
/// Props come either from delegate methods (derived) or from [`SpecModelBuilder::props`]
/// (pre-computed), never both.
pub struct SpecModelBuilder {
    qualified_spec_name: Option<String>,
    component_class_name: Option<String>,
    component_class: Option<TypeName>,
    delegate_methods: Option<Vec<DelegateMethodModel>>,
    event_methods: Vec<EventMethodModel>,
    trigger_methods: Vec<EventMethodModel>,
    update_state_methods: Vec<UpdateStateMethodModel>,
    props: Option<Vec<PropModel>>,
    inject_props: Option<Vec<InjectPropModel>>,
    cached_prop_names: CachedPropNames,
    type_variables: Vec<TypeVariable>,
    prop_defaults: Vec<PropDefaultModel>,
    event_declarations: Vec<EventDeclarationModel>,
    extra_builder_methods: Vec<BuilderMethodModel>,
    class_annotations: Vec<String>,
    tags: Vec<TagModel>,
    class_javadoc: String,
    prop_javadocs: Vec<PropJavadocModel>,
    is_public: bool,
    dependency_injection_helper: Option<DependencyInjectionHelper>,
    spec_element_type: SpecElementType,
    represented_object: Option<SourceAnchor>,
    synthetic_rules: &'static [&'static dyn SyntheticEventRule],
}

impl Default for SpecModelBuilder {
    fn default() -> Self {
        Self {
            qualified_spec_name: None,
            component_class_name: None,
            component_class: None,
            delegate_methods: None,
            event_methods: Vec::new(),
            trigger_methods: Vec::new(),
            update_state_methods: Vec::new(),
            props: None,
            inject_props: None,
            cached_prop_names: CachedPropNames::default(),
            type_variables: Vec::new(),
            prop_defaults: Vec::new(),
            event_declarations: Vec::new(),
            extra_builder_methods: Vec::new(),
            class_annotations: Vec::new(),
            tags: Vec::new(),
            class_javadoc: String::new(),
            prop_javadocs: Vec::new(),
            is_public: false,
            dependency_injection_helper: None,
            spec_element_type: SpecElementType::default(),
            represented_object: None,
            synthetic_rules: DEFAULT_RULES,
        }
    }
}

impl SpecModelBuilder {
    /// Fully qualified spec name, e.g. `com.example.CardSpec`. Required.
    pub fn qualified_spec_name(mut self, name: impl Into<String>) -> Self {
        self.qualified_spec_name = Some(name.into());
        self
    }

    /// Simple name for the generated component.
    ///
    /// When unset the spec name without its `Spec` suffix is used.
    pub fn component_class_name(mut self, name: impl Into<String>) -> Self {
        self.component_class_name = Some(name.into());
        self
    }

    /// Base class of the generated component.
    pub fn component_class(mut self, class: impl Into<TypeName>) -> Self {
        self.component_class = Some(class.into());
        self
    }

    /// Lifecycle delegate methods; props are derived from the method groups.
    pub fn delegate_methods(mut self, methods: Vec<DelegateMethodModel>) -> Self {
        self.delegate_methods = Some(methods);
        self
    }

    /// Authored event handlers.
    pub fn event_methods(mut self, methods: Vec<EventMethodModel>) -> Self {
        self.event_methods = methods;
        self
    }

    /// Trigger methods.
    pub fn trigger_methods(mut self, methods: Vec<EventMethodModel>) -> Self {
        self.trigger_methods = methods;
        self
    }

    /// State-update methods.
    pub fn update_state_methods(mut self, methods: Vec<UpdateStateMethodModel>) -> Self {
        self.update_state_methods = methods;
        self
    }

    /// Pre-computed props, used verbatim instead of deriving them.
    pub fn props(mut self, props: Vec<PropModel>) -> Self {
        self.props = Some(props);
        self
    }

    /// Pre-computed inject-props, used verbatim instead of deriving them.
    pub fn inject_props(mut self, props: Vec<InjectPropModel>) -> Self {
        self.inject_props = Some(props);
        self
    }

    /// Names persisted by the previous derivation run.
    pub fn cached_prop_names(mut self, names: impl Into<CachedPropNames>) -> Self {
        self.cached_prop_names = names.into();
        self
    }

    /// Generic type parameters of the spec.
    pub fn type_variables(mut self, vars: Vec<TypeVariable>) -> Self {
        self.type_variables = vars;
        self
    }

    /// Declared prop defaults, passed through untouched.
    pub fn prop_defaults(mut self, defaults: Vec<PropDefaultModel>) -> Self {
        self.prop_defaults = defaults;
        self
    }

    /// Event types the component declares.
    pub fn event_declarations(mut self, declarations: Vec<EventDeclarationModel>) -> Self {
        self.event_declarations = declarations;
        self
    }

    /// Extra setters for the generated builder.
    pub fn extra_builder_methods(mut self, methods: Vec<BuilderMethodModel>) -> Self {
        self.extra_builder_methods = methods;
        self
    }

    /// Annotations copied onto the generated component.
    pub fn class_annotations(mut self, annotations: Vec<String>) -> Self {
        self.class_annotations = annotations;
        self
    }

    /// Marker tags of the generated component.
    pub fn tags(mut self, tags: Vec<TagModel>) -> Self {
        self.tags = tags;
        self
    }

    /// Class-level documentation.
    pub fn class_javadoc(mut self, doc: impl Into<String>) -> Self {
        self.class_javadoc = doc.into();
        self
    }

    /// Per-prop documentation.
    pub fn prop_javadocs(mut self, docs: Vec<PropJavadocModel>) -> Self {
        self.prop_javadocs = docs;
        self
    }

    /// Visibility of the generated component.
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Marks the component as constructed through dependency injection.
    pub fn dependency_injection_helper(mut self, helper: DependencyInjectionHelper) -> Self {
        self.dependency_injection_helper = Some(helper);
        self
    }

    /// Shape of the spec declaration; defaults to [`SpecElementType::Class`].
    pub fn spec_element_type(mut self, element_type: SpecElementType) -> Self {
        self.spec_element_type = element_type;
        self
    }

    /// Source element diagnostics are anchored to. Required.
    pub fn represented_object(mut self, anchor: SourceAnchor) -> Self {
        self.represented_object = Some(anchor);
        self
    }

    /// Replace the synthetic event rules (defaults to [`DEFAULT_RULES`]).
    pub fn synthetic_rules(mut self, rules: &'static [&'static dyn SyntheticEventRule]) -> Self {
        self.synthetic_rules = rules;
        self
    }

    fn validate(&self) -> SpecModelResult<()> {
        if self
            .qualified_spec_name
            .as_deref()
            .is_none_or(|n| n.trim().is_empty())
        {
            return Err(SpecModelError::configuration(
                "must specify a qualified spec name",
            ));
        }
        match (&self.delegate_methods, &self.props) {
            (None, None) => {
                return Err(SpecModelError::configuration(
                    "must specify delegate methods or a pre-computed prop list",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(SpecModelError::configuration(
                    "must not provide both props and delegate methods",
                ));
            }
            _ => {}
        }
        if self.represented_object.is_none() {
            return Err(SpecModelError::configuration(
                "must specify a represented object",
            ));
        }
        Ok(())
    }

    /// Validate inputs and derive the model.
    ///
    /// Fails with [`SpecModelError::Configuration`] when the qualified name or represented
    /// object is missing, or when props and delegate methods are both given or both absent.
    #[tracing::instrument(
        skip(self),
        fields(spec = self.qualified_spec_name.as_deref().unwrap_or("<unset>"))
    )]
    pub fn build(self) -> SpecModelResult<SpecModel> {
        self.validate()?;

        let qualified = self.qualified_spec_name.unwrap_or_default();
        let component_type =
            component_type_name(&qualified, self.component_class_name.as_deref());
        let represented_object = self
            .represented_object
            .ok_or_else(|| SpecModelError::configuration("must specify a represented object"))?;

        let delegate_methods = self.delegate_methods.unwrap_or_default();
        let event_methods =
            combined_event_methods(&delegate_methods, self.event_methods, self.synthetic_rules);
        let groups = MethodGroups {
            delegate: &delegate_methods,
            event: &event_methods,
            trigger: &self.trigger_methods,
            update_state: &self.update_state_methods,
        };
        let cache = self.cached_prop_names;

        let raw_props = raw_props(&groups);
        let props = match self.props {
            Some(props) if !props.is_empty() => props,
            _ => derive_props(&raw_props, &diff_props(&groups), &cache),
        };
        let raw_inject_props = dedup_inject_props(scanned_inject_props(&groups));
        let inject_props = match self.inject_props {
            Some(inject_props) if !inject_props.is_empty() => inject_props,
            _ => rename_inject_props(&raw_inject_props, &cache, props.len()),
        };

        let state_values = derive_state_values(&groups);
        let inter_stage_inputs = derive_inter_stage_inputs(&groups);
        let tree_props = derive_tree_props(&groups);
        let render_data_diffs = derive_render_data_diffs(&groups);

        tracing::debug!(
            props = props.len(),
            inject_props = inject_props.len(),
            state_values = state_values.len(),
            event_methods = event_methods.len(),
            cached_names = cache.len(),
            "derived spec model"
        );

        Ok(SpecModel {
            spec_name: simple_name(&qualified).to_string(),
            spec_type_name: TypeName::new(qualified.as_str()),
            component_name: simple_name(&component_type).to_string(),
            component_type_name: TypeName::new(component_type),
            component_class: self.component_class,
            delegate_methods,
            event_methods,
            trigger_methods: self.trigger_methods,
            update_state_methods: self.update_state_methods,
            raw_props,
            props,
            raw_inject_props,
            inject_props,
            prop_defaults: self.prop_defaults,
            type_variables: self.type_variables,
            state_values,
            inter_stage_inputs,
            tree_props,
            event_declarations: self.event_declarations,
            extra_builder_methods: self.extra_builder_methods,
            render_data_diffs,
            class_annotations: self.class_annotations,
            tags: self.tags,
            class_javadoc: self.class_javadoc,
            prop_javadocs: self.prop_javadocs,
            is_public: self.is_public,
            dependency_injection_helper: self.dependency_injection_helper,
            spec_element_type: self.spec_element_type,
            represented_object,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/builder.rs"]
mod tests;
