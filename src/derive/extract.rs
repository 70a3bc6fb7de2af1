use crate::model::{
    method::{DelegateMethodModel, EventMethodModel, UpdateStateMethodModel},
    param::{
        DiffPropModel, DiffStateParamModel, InjectPropModel, MethodParam, ParamCategory, PropModel,
    },
};

/// Borrowed view over the four method groups of a spec, in scan order.
#[derive(Clone, Copy, Debug)]
pub struct MethodGroups<'a> {
    /// Lifecycle delegate methods; scanned first.
    pub delegate: &'a [DelegateMethodModel],
    /// Event handlers, including synthesized ones.
    pub event: &'a [EventMethodModel],
    /// Trigger methods.
    pub trigger: &'a [EventMethodModel],
    /// State-update methods; scanned last.
    pub update_state: &'a [UpdateStateMethodModel],
}

impl<'a> MethodGroups<'a> {
    /// Every parameter, delegate → event → trigger → update-state, each in declared order.
    pub fn params(&self) -> impl Iterator<Item = &'a MethodParam> + use<'a> {
        let delegate = self.delegate.iter().flat_map(|m| m.params.iter());
        let event = self.event.iter().flat_map(|m| m.params.iter());
        let trigger = self.trigger.iter().flat_map(|m| m.params.iter());
        let update_state = self.update_state.iter().flat_map(|m| m.params.iter());
        delegate.chain(event).chain(trigger).chain(update_state)
    }

    /// Parameters of delegate methods only.
    pub fn delegate_params(&self) -> impl Iterator<Item = &'a MethodParam> + use<'a> {
        self.delegate.iter().flat_map(|m| m.params.iter())
    }

    /// Every parameter classified as `category`, in scan order.
    pub fn params_of(&self, category: ParamCategory) -> Vec<MethodParam> {
        self.params()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// Project every parameter through `project`, keeping matches in scan order.
    pub(crate) fn collect<T, F>(&self, project: F) -> Vec<T>
    where
        T: Clone + 'a,
        F: Fn(&'a MethodParam) -> Option<&'a T>,
    {
        self.params().filter_map(project).cloned().collect()
    }

    /// Like [`MethodGroups::collect`] but over delegate methods only.
    pub(crate) fn collect_delegate<T, F>(&self, project: F) -> Vec<T>
    where
        T: Clone + 'a,
        F: Fn(&'a MethodParam) -> Option<&'a T>,
    {
        self.delegate_params().filter_map(project).cloned().collect()
    }
}

/// Props before dedup and renaming.
///
/// Plain props in scan order, then the underlying prop of every delegate diff prop. The
/// diff-derived tail is exactly `diff_props(groups).len()` long.
pub fn raw_props(groups: &MethodGroups<'_>) -> Vec<PropModel> {
    let mut props = groups.collect(MethodParam::as_prop);
    props.extend(
        diff_props(groups)
            .into_iter()
            .map(|diff| diff.underlying_prop().clone()),
    );
    props
}

/// Inject-props in scan order, duplicates included.
pub fn scanned_inject_props(groups: &MethodGroups<'_>) -> Vec<InjectPropModel> {
    groups.collect(MethodParam::as_inject_prop)
}

/// Diff props declared on delegate methods, in scan order.
pub fn diff_props(groups: &MethodGroups<'_>) -> Vec<DiffPropModel> {
    groups.collect_delegate(MethodParam::as_diff_prop)
}

/// Diff state values declared on delegate methods, in scan order.
pub fn diff_state_values(groups: &MethodGroups<'_>) -> Vec<DiffStateParamModel> {
    groups.collect_delegate(MethodParam::as_diff_state_value)
}

#[cfg(test)]
#[path = "../../tests/unit/derive/extract.rs"]
mod tests;
