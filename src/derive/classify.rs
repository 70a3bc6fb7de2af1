use crate::{
    foundation::names::TypeName,
    model::param::{
        DiffPropModel, DiffStateParamModel, InjectPropModel, InterStageInputModel, MethodParam,
        ParamCategory, PropModel, RenderDataDiffModel, SimpleParamModel, StateParamModel,
        TreePropModel,
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Role marker attached to a parameter by the front-end.
pub enum ParamMarker {
    /// Declared as a prop.
    Prop,
    /// Declared as an injected prop.
    InjectProp,
    /// Declared as state.
    State,
    /// Declared as a tree value.
    TreeProp,
    /// Consumes the output of an earlier lifecycle stage.
    InterStage,
    /// Wrapped in a previous/next diff container.
    Diff,
}

/// Classify a parameter from its role markers.
///
/// Total: unmarked or unrecognized combinations are [`ParamCategory::Plain`].
/// A diff marker turns a prop into a diff prop and state into diff state; a bare diff is a
/// render-data diff. Otherwise the first of prop, inject-prop, state, inter-stage, tree wins.
pub fn classify(markers: &[ParamMarker]) -> ParamCategory {
    let has = |m: ParamMarker| markers.contains(&m);

    if has(ParamMarker::Diff) {
        return if has(ParamMarker::Prop) {
            ParamCategory::DiffProp
        } else if has(ParamMarker::State) {
            ParamCategory::DiffStateValue
        } else {
            ParamCategory::RenderDataDiff
        };
    }

    if has(ParamMarker::Prop) {
        ParamCategory::Prop
    } else if has(ParamMarker::InjectProp) {
        ParamCategory::InjectProp
    } else if has(ParamMarker::State) {
        ParamCategory::StateValue
    } else if has(ParamMarker::InterStage) {
        ParamCategory::InterStageInput
    } else if has(ParamMarker::TreeProp) {
        ParamCategory::TreeValue
    } else {
        ParamCategory::Plain
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A parameter as handed over by the front-end, before classification.
///
/// For diff params `type_name` is the type of the wrapped value, not `Diff<T>`.
pub struct RawParam {
    /// Declared name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub type_name: TypeName,
    /// Role markers.
    #[serde(default)]
    pub markers: Vec<ParamMarker>,
    /// Prop may be omitted by the caller.
    #[serde(default)]
    pub optional: bool,
    /// Single-item name for variadic props.
    #[serde(default)]
    pub var_arg: Option<String>,
    /// Author documentation.
    #[serde(default)]
    pub doc: Option<String>,
    /// State may be updated lazily.
    #[serde(default)]
    pub can_update_lazily: bool,
    /// Annotations passed through untouched.
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl RawParam {
    /// Unmarked param.
    pub fn new(name: impl Into<String>, type_name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            markers: Vec::new(),
            optional: false,
            var_arg: None,
            doc: None,
            can_update_lazily: false,
            annotations: Vec::new(),
        }
    }

    /// Add a role marker.
    pub fn marker(mut self, marker: ParamMarker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Category this param classifies to.
    pub fn category(&self) -> ParamCategory {
        classify(&self.markers)
    }

    fn into_prop(self) -> PropModel {
        PropModel {
            name: self.name,
            type_name: self.type_name,
            optional: self.optional,
            var_arg: self.var_arg,
            doc: self.doc,
            annotations: self.annotations,
        }
    }

    fn into_state(self) -> StateParamModel {
        StateParamModel {
            name: self.name,
            type_name: self.type_name,
            can_update_lazily: self.can_update_lazily,
        }
    }
}

impl From<RawParam> for MethodParam {
    fn from(raw: RawParam) -> Self {
        match raw.category() {
            ParamCategory::Prop => Self::Prop(raw.into_prop()),
            ParamCategory::DiffProp => Self::DiffProp(DiffPropModel::new(raw.into_prop())),
            ParamCategory::StateValue => Self::StateValue(raw.into_state()),
            ParamCategory::DiffStateValue => {
                Self::DiffStateValue(DiffStateParamModel::new(raw.into_state()))
            }
            ParamCategory::InjectProp => Self::InjectProp(InjectPropModel {
                name: raw.name,
                type_name: raw.type_name,
                annotations: raw.annotations,
            }),
            ParamCategory::InterStageInput => Self::InterStageInput(InterStageInputModel {
                name: raw.name,
                type_name: raw.type_name,
            }),
            ParamCategory::TreeValue => Self::TreeValue(TreePropModel {
                name: raw.name,
                type_name: raw.type_name,
            }),
            ParamCategory::RenderDataDiff => Self::RenderDataDiff(RenderDataDiffModel {
                name: raw.name,
                type_name: raw.type_name,
            }),
            ParamCategory::Plain => Self::Plain(SimpleParamModel {
                name: raw.name,
                type_name: raw.type_name,
                annotations: raw.annotations,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/derive/classify.rs"]
mod tests;
