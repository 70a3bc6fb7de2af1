use crate::{
    derive::{
        canonical::CanonicalSet,
        extract::{MethodGroups, diff_state_values},
    },
    model::param::{
        InterStageInputModel, MethodParam, RenderDataDiffModel, StateParamModel, TreePropModel,
    },
};

/// State values in canonical order.
///
/// Delegate diff-state params contribute their underlying value only when no equal state
/// value was declared directly.
pub fn derive_state_values(groups: &MethodGroups<'_>) -> Vec<StateParamModel> {
    let mut states: CanonicalSet<StateParamModel> = groups
        .collect(MethodParam::as_state_value)
        .into_iter()
        .collect();

    for diff in diff_state_values(groups) {
        if states.iter().any(|s| diff.is_same_underlying_state(s)) {
            continue;
        }
        tracing::trace!(state = %diff.underlying_state().name, "state declared only as diff");
        states.insert(diff.underlying_state().clone());
    }

    states.into_canonical_order()
}

/// Inter-stage inputs in canonical order.
pub fn derive_inter_stage_inputs(groups: &MethodGroups<'_>) -> Vec<InterStageInputModel> {
    groups
        .collect(MethodParam::as_inter_stage_input)
        .into_iter()
        .collect::<CanonicalSet<_>>()
        .into_canonical_order()
}

/// Tree values in canonical order.
pub fn derive_tree_props(groups: &MethodGroups<'_>) -> Vec<TreePropModel> {
    groups
        .collect(MethodParam::as_tree_value)
        .into_iter()
        .collect::<CanonicalSet<_>>()
        .into_canonical_order()
}

/// Render-data diffs of delegate methods in canonical order.
pub fn derive_render_data_diffs(groups: &MethodGroups<'_>) -> Vec<RenderDataDiffModel> {
    groups
        .collect_delegate(MethodParam::as_render_data_diff)
        .into_iter()
        .collect::<CanonicalSet<_>>()
        .into_canonical_order()
}

#[cfg(test)]
#[path = "../../tests/unit/derive/values.rs"]
mod tests;
