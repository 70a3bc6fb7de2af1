use crate::foundation::names::TypeName;

/// Container type used to spell diff-variant parameter types.
pub const DIFF_CONTAINER: &str = "Diff";

/// Closed set of semantic categories a method parameter can belong to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParamCategory {
    /// Caller-set value.
    Prop,
    /// Value supplied through dependency injection.
    InjectProp,
    /// Component-owned state.
    StateValue,
    /// Previous/next wrapper around a state value.
    DiffStateValue,
    /// Previous/next wrapper around a prop.
    DiffProp,
    /// Value produced by an earlier lifecycle method.
    InterStageInput,
    /// Value propagated down the component tree.
    TreeValue,
    /// Change between previous and current render data.
    RenderDataDiff,
    /// Anything else (contexts, event fields, ...); ignored by extraction.
    Plain,
}

/// Name and declared type shared by every parameter model.
pub trait ParamModel {
    /// Declared parameter name.
    fn name(&self) -> &str;
    /// Declared parameter type.
    fn type_name(&self) -> &TypeName;
}

macro_rules! impl_param_model {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamModel for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn type_name(&self) -> &TypeName {
                    &self.type_name
                }
            }
        )*
    };
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A caller-set prop.
pub struct PropModel {
    /// Prop name; may be replaced by a cached name.
    pub name: String,
    /// Declared prop type.
    pub type_name: TypeName,
    /// Whether the caller may omit the prop.
    #[serde(default)]
    pub optional: bool,
    /// Single-item name for variadic props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_arg: Option<String>,
    /// Author documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Extra annotations carried through to the generator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl PropModel {
    /// Required prop with no metadata.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            var_arg: None,
            doc: None,
            annotations: Vec::new(),
        }
    }

    /// Mark the prop optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attach author documentation.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Same prop under another name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A prop supplied by the dependency-injection layer.
pub struct InjectPropModel {
    /// Inject-prop name; may be replaced by a cached name.
    pub name: String,
    /// Declared type.
    pub type_name: TypeName,
    /// Extra annotations (qualifiers etc.).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl InjectPropModel {
    /// Inject-prop with no annotations.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    /// Same inject-prop under another name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A component-owned state value.
pub struct StateParamModel {
    /// State name.
    pub name: String,
    /// Declared type.
    pub type_name: TypeName,
    /// Whether updates may be applied lazily.
    #[serde(default)]
    pub can_update_lazily: bool,
}

impl StateParamModel {
    /// Eagerly updated state value.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            can_update_lazily: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Diff wrapper around a prop.
pub struct DiffPropModel {
    underlying: PropModel,
    diff_type: TypeName,
}

impl DiffPropModel {
    /// Wrap `underlying`; the param's own type becomes `Diff<T>`.
    pub fn new(underlying: PropModel) -> Self {
        let diff_type = underlying.type_name.wrapped_in(DIFF_CONTAINER);
        Self {
            underlying,
            diff_type,
        }
    }

    /// The wrapped prop.
    pub fn underlying_prop(&self) -> &PropModel {
        &self.underlying
    }

    /// Whether `prop` denotes the value this diff wraps.
    ///
    /// Names match on the underlying name or on `cached_name`; types must be identical.
    pub fn is_same_underlying_prop(&self, prop: &PropModel, cached_name: Option<&str>) -> bool {
        let name_matches =
            prop.name == self.underlying.name || cached_name.is_some_and(|c| prop.name == c);
        name_matches && prop.type_name == self.underlying.type_name
    }
}

impl ParamModel for DiffPropModel {
    fn name(&self) -> &str {
        &self.underlying.name
    }

    fn type_name(&self) -> &TypeName {
        &self.diff_type
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Diff wrapper around a state value.
pub struct DiffStateParamModel {
    underlying: StateParamModel,
    diff_type: TypeName,
}

impl DiffStateParamModel {
    /// Wrap `underlying`; the param's own type becomes `Diff<T>`.
    pub fn new(underlying: StateParamModel) -> Self {
        let diff_type = underlying.type_name.wrapped_in(DIFF_CONTAINER);
        Self {
            underlying,
            diff_type,
        }
    }

    /// The wrapped state value.
    pub fn underlying_state(&self) -> &StateParamModel {
        &self.underlying
    }

    /// Whether `state` denotes the value this diff wraps (same name and type).
    pub fn is_same_underlying_state(&self, state: &StateParamModel) -> bool {
        state.name == self.underlying.name && state.type_name == self.underlying.type_name
    }
}

impl ParamModel for DiffStateParamModel {
    fn name(&self) -> &str {
        &self.underlying.name
    }

    fn type_name(&self) -> &TypeName {
        &self.diff_type
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A value computed in one lifecycle method and consumed by a later one.
pub struct InterStageInputModel {
    /// Input name.
    pub name: String,
    /// Declared type.
    pub type_name: TypeName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A value propagated implicitly down the component tree.
pub struct TreePropModel {
    /// Tree value name.
    pub name: String,
    /// Declared type.
    pub type_name: TypeName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A previous/current render-data pair.
pub struct RenderDataDiffModel {
    /// Diff name.
    pub name: String,
    /// Declared type of the compared data.
    pub type_name: TypeName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Any parameter without a derivation-relevant role.
pub struct SimpleParamModel {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub type_name: TypeName,
    /// Annotations carried through to the generator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl SimpleParamModel {
    /// Plain param with no annotations.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }
}

impl_param_model!(
    PropModel,
    InjectPropModel,
    StateParamModel,
    InterStageInputModel,
    TreePropModel,
    RenderDataDiffModel,
    SimpleParamModel,
);

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
/// A classified method parameter.
pub enum MethodParam {
    /// See [`ParamCategory::Prop`].
    Prop(PropModel),
    /// See [`ParamCategory::InjectProp`].
    InjectProp(InjectPropModel),
    /// See [`ParamCategory::StateValue`].
    StateValue(StateParamModel),
    /// See [`ParamCategory::DiffStateValue`].
    DiffStateValue(DiffStateParamModel),
    /// See [`ParamCategory::DiffProp`].
    DiffProp(DiffPropModel),
    /// See [`ParamCategory::InterStageInput`].
    InterStageInput(InterStageInputModel),
    /// See [`ParamCategory::TreeValue`].
    TreeValue(TreePropModel),
    /// See [`ParamCategory::RenderDataDiff`].
    RenderDataDiff(RenderDataDiffModel),
    /// See [`ParamCategory::Plain`].
    Plain(SimpleParamModel),
}

impl MethodParam {
    /// Category tag of this parameter.
    pub fn category(&self) -> ParamCategory {
        match self {
            Self::Prop(_) => ParamCategory::Prop,
            Self::InjectProp(_) => ParamCategory::InjectProp,
            Self::StateValue(_) => ParamCategory::StateValue,
            Self::DiffStateValue(_) => ParamCategory::DiffStateValue,
            Self::DiffProp(_) => ParamCategory::DiffProp,
            Self::InterStageInput(_) => ParamCategory::InterStageInput,
            Self::TreeValue(_) => ParamCategory::TreeValue,
            Self::RenderDataDiff(_) => ParamCategory::RenderDataDiff,
            Self::Plain(_) => ParamCategory::Plain,
        }
    }

    fn model(&self) -> &dyn ParamModel {
        match self {
            Self::Prop(p) => p,
            Self::InjectProp(p) => p,
            Self::StateValue(p) => p,
            Self::DiffStateValue(p) => p,
            Self::DiffProp(p) => p,
            Self::InterStageInput(p) => p,
            Self::TreeValue(p) => p,
            Self::RenderDataDiff(p) => p,
            Self::Plain(p) => p,
        }
    }

    /// Declared parameter name.
    pub fn name(&self) -> &str {
        self.model().name()
    }

    /// Declared parameter type (`Diff<T>` for diff variants).
    pub fn type_name(&self) -> &TypeName {
        self.model().type_name()
    }

    /// The prop, if this is a prop param.
    pub fn as_prop(&self) -> Option<&PropModel> {
        match self {
            Self::Prop(p) => Some(p),
            _ => None,
        }
    }

    /// The inject-prop, if this is an inject-prop param.
    pub fn as_inject_prop(&self) -> Option<&InjectPropModel> {
        match self {
            Self::InjectProp(p) => Some(p),
            _ => None,
        }
    }

    /// The state value, if this is a state param.
    pub fn as_state_value(&self) -> Option<&StateParamModel> {
        match self {
            Self::StateValue(p) => Some(p),
            _ => None,
        }
    }

    /// The diff prop, if this is a diff-prop param.
    pub fn as_diff_prop(&self) -> Option<&DiffPropModel> {
        match self {
            Self::DiffProp(p) => Some(p),
            _ => None,
        }
    }

    /// The diff state value, if this is a diff-state param.
    pub fn as_diff_state_value(&self) -> Option<&DiffStateParamModel> {
        match self {
            Self::DiffStateValue(p) => Some(p),
            _ => None,
        }
    }

    /// The inter-stage input, if this is an inter-stage param.
    pub fn as_inter_stage_input(&self) -> Option<&InterStageInputModel> {
        match self {
            Self::InterStageInput(p) => Some(p),
            _ => None,
        }
    }

    /// The tree value, if this is a tree param.
    pub fn as_tree_value(&self) -> Option<&TreePropModel> {
        match self {
            Self::TreeValue(p) => Some(p),
            _ => None,
        }
    }

    /// The render-data diff, if this is a render-data diff param.
    pub fn as_render_data_diff(&self) -> Option<&RenderDataDiffModel> {
        match self {
            Self::RenderDataDiff(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/param.rs"]
mod tests;
