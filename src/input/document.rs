use std::path::Path;

use crate::{
    derive::{cached_names::CachedPropNames, classify::RawParam},
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
            DelegateHook, DelegateMethodModel, EventDeclarationModel, EventMethodModel,
            UpdateStateMethod, UpdateStateMethodModel,
        },
        param::{MethodParam, PropModel},
    },
    spec::{builder::SpecModelBuilder, model::SpecModel},
};

fn classify_params(params: Vec<RawParam>) -> Vec<MethodParam> {
    params.into_iter().map(MethodParam::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A delegate method with unclassified params.
pub struct DelegateMethodDoc {
    /// Hook the method implements.
    pub hook: DelegateHook,
    /// Method name.
    pub name: String,
    /// Declared return type; `void` when omitted.
    #[serde(default)]
    pub return_type: Option<TypeName>,
    /// Declared params.
    #[serde(default)]
    pub params: Vec<RawParam>,
}

impl DelegateMethodDoc {
    fn into_model(self) -> DelegateMethodModel {
        let method =
            DelegateMethodModel::delegate(self.hook, self.name, classify_params(self.params));
        match self.return_type {
            Some(ty) => method.with_return_type(ty),
            None => method,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// An event handler or trigger with unclassified params.
pub struct EventMethodDoc {
    /// Method name.
    pub name: String,
    /// Event the method handles.
    pub event: EventDeclarationModel,
    /// Declared params.
    #[serde(default)]
    pub params: Vec<RawParam>,
}

impl EventMethodDoc {
    fn into_model(self) -> EventMethodModel {
        EventMethodModel::event(self.name, self.event, classify_params(self.params))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A state-update method with unclassified params.
pub struct UpdateStateMethodDoc {
    /// Method name.
    pub name: String,
    /// Update may be applied lazily.
    #[serde(default)]
    pub lazy: bool,
    /// Declared params.
    #[serde(default)]
    pub params: Vec<RawParam>,
}

impl UpdateStateMethodDoc {
    fn into_model(self) -> UpdateStateMethodModel {
        let mut method =
            UpdateStateMethodModel::update_state(self.name, classify_params(self.params));
        method.kind = UpdateStateMethod { lazy: self.lazy };
        method
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// JSON description of one component spec as produced by a front-end.
///
/// Parameters arrive with role markers and are classified on [`SpecDocument::into_builder`].
pub struct SpecDocument {
    /// Fully qualified spec name.
    pub qualified_name: String,
    /// Override for the generated component's simple name.
    #[serde(default)]
    pub component_class_name: Option<String>,
    /// Base class of the generated component.
    #[serde(default)]
    pub component_class: Option<TypeName>,
    /// Source element the spec was read from.
    #[serde(default)]
    pub origin: Option<SourceAnchor>,
    /// Delegate methods; absent for documents carrying pre-computed props.
    #[serde(default)]
    pub delegate_methods: Option<Vec<DelegateMethodDoc>>,
    /// Pre-computed props.
    #[serde(default)]
    pub props: Option<Vec<PropModel>>,
    /// Event handlers.
    #[serde(default)]
    pub event_methods: Vec<EventMethodDoc>,
    /// Trigger methods.
    #[serde(default)]
    pub trigger_methods: Vec<EventMethodDoc>,
    /// State-update methods.
    #[serde(default)]
    pub update_state_methods: Vec<UpdateStateMethodDoc>,
    /// Names persisted from the previous run.
    #[serde(default)]
    pub cached_prop_names: CachedPropNames,
    /// Generic type parameters.
    #[serde(default)]
    pub type_variables: Vec<TypeVariable>,
    /// Declared prop defaults.
    #[serde(default)]
    pub prop_defaults: Vec<PropDefaultModel>,
    /// Declared event types.
    #[serde(default)]
    pub event_declarations: Vec<EventDeclarationModel>,
    /// Extra setters for the generated builder.
    #[serde(default)]
    pub extra_builder_methods: Vec<BuilderMethodModel>,
    /// Annotations for the generated component.
    #[serde(default)]
    pub class_annotations: Vec<String>,
    /// Marker tags.
    #[serde(default)]
    pub tags: Vec<TagModel>,
    /// Class-level documentation.
    #[serde(default)]
    pub class_javadoc: String,
    /// Per-prop documentation.
    #[serde(default)]
    pub prop_javadocs: Vec<PropJavadocModel>,
    /// Visibility of the generated component.
    #[serde(default)]
    pub is_public: bool,
    /// Dependency-injection marker.
    #[serde(default)]
    pub dependency_injection: Option<DependencyInjectionHelper>,
    /// Shape of the spec declaration.
    #[serde(default)]
    pub element_type: SpecElementType,
}

impl SpecDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> SpecModelResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpecModelError::serde(format!("parse spec document JSON: {e}")))
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SpecModelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SpecModelError::serde(format!("parse spec document JSON: {e}")))
    }

    /// Open and parse a JSON document file.
    pub fn from_path(path: impl AsRef<Path>) -> SpecModelResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            SpecModelError::Other(anyhow::anyhow!(
                "open spec document '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Classify params and load everything into a builder.
    pub fn into_builder(self) -> SpecModelBuilder {
        let mut builder = SpecModel::builder()
            .qualified_spec_name(self.qualified_name)
            .event_methods(
                self.event_methods
                    .into_iter()
                    .map(EventMethodDoc::into_model)
                    .collect(),
            )
            .trigger_methods(
                self.trigger_methods
                    .into_iter()
                    .map(EventMethodDoc::into_model)
                    .collect(),
            )
            .update_state_methods(
                self.update_state_methods
                    .into_iter()
                    .map(UpdateStateMethodDoc::into_model)
                    .collect(),
            )
            .cached_prop_names(self.cached_prop_names)
            .type_variables(self.type_variables)
            .prop_defaults(self.prop_defaults)
            .event_declarations(self.event_declarations)
            .extra_builder_methods(self.extra_builder_methods)
            .class_annotations(self.class_annotations)
            .tags(self.tags)
            .class_javadoc(self.class_javadoc)
            .prop_javadocs(self.prop_javadocs)
            .is_public(self.is_public)
            .spec_element_type(self.element_type);

        if let Some(name) = self.component_class_name {
            builder = builder.component_class_name(name);
        }
        if let Some(class) = self.component_class {
            builder = builder.component_class(class);
        }
        if let Some(origin) = self.origin {
            builder = builder.represented_object(origin);
        }
        if let Some(delegates) = self.delegate_methods {
            builder = builder.delegate_methods(
                delegates
                    .into_iter()
                    .map(DelegateMethodDoc::into_model)
                    .collect(),
            );
        }
        if let Some(props) = self.props {
            builder = builder.props(props);
        }
        if let Some(helper) = self.dependency_injection {
            builder = builder.dependency_injection_helper(helper);
        }
        builder
    }

    /// Classify, validate and derive in one step.
    #[tracing::instrument(skip(self), fields(spec = %self.qualified_name))]
    pub fn build(self) -> SpecModelResult<SpecModel> {
        self.into_builder().build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/document.rs"]
mod tests;
