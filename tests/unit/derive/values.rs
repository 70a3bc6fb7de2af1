use super::*;
use crate::model::{
    method::{DelegateHook, DelegateMethodModel, EventDeclarationModel, EventMethodModel},
    param::DiffStateParamModel,
};

fn state(name: &str, ty: &str) -> MethodParam {
    MethodParam::StateValue(StateParamModel::new(name, ty))
}

fn diff_state(name: &str, ty: &str) -> MethodParam {
    MethodParam::DiffStateValue(DiffStateParamModel::new(StateParamModel::new(name, ty)))
}

fn groups_of<'a>(
    delegate: &'a [DelegateMethodModel],
    event: &'a [EventMethodModel],
) -> MethodGroups<'a> {
    MethodGroups {
        delegate,
        event,
        trigger: &[],
        update_state: &[],
    }
}

#[test]
fn state_values_are_deduplicated_in_canonical_order() {
    let delegate = [DelegateMethodModel::delegate(
        DelegateHook::OnCreateLayout,
        "onCreateLayout",
        vec![state("selected", "boolean"), state("count", "int")],
    )];
    let event = [EventMethodModel::event(
        "onClick",
        EventDeclarationModel::new("ClickEvent", vec![]),
        vec![state("count", "int")],
    )];
    let states = derive_state_values(&groups_of(&delegate, &event));
    let names: Vec<_> = states.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["count", "selected"]);
}

#[test]
fn diff_state_of_declared_state_is_redundant() {
    let delegate = [DelegateMethodModel::delegate(
        DelegateHook::OnCreateLayout,
        "onCreateLayout",
        vec![state("count", "int"), diff_state("count", "int")],
    )];
    let states = derive_state_values(&groups_of(&delegate, &[]));
    assert_eq!(states.len(), 1);
}

#[test]
fn diff_only_state_surfaces_its_underlying_value() {
    let delegate = [DelegateMethodModel::delegate(
        DelegateHook::ShouldUpdate,
        "shouldUpdate",
        vec![diff_state("expanded", "boolean")],
    )];
    let states = derive_state_values(&groups_of(&delegate, &[]));
    assert_eq!(states, [StateParamModel::new("expanded", "boolean")]);
}

#[test]
fn diff_state_outside_delegates_is_ignored() {
    let event = [EventMethodModel::event(
        "onClick",
        EventDeclarationModel::new("ClickEvent", vec![]),
        vec![diff_state("expanded", "boolean")],
    )];
    assert!(derive_state_values(&groups_of(&[], &event)).is_empty());
}

#[test]
fn tree_and_inter_stage_values_collapse_duplicates() {
    let tree = |n: &str| {
        MethodParam::TreeValue(TreePropModel {
            name: n.to_string(),
            type_name: "Theme".into(),
        })
    };
    let stage = |n: &str| {
        MethodParam::InterStageInput(InterStageInputModel {
            name: n.to_string(),
            type_name: "Size".into(),
        })
    };
    let delegate = [
        DelegateMethodModel::delegate(
            DelegateHook::OnMeasure,
            "onMeasure",
            vec![tree("theme"), stage("measured")],
        ),
        DelegateMethodModel::delegate(
            DelegateHook::OnMount,
            "onMount",
            vec![tree("theme"), stage("measured"), stage("bounds")],
        ),
    ];
    let groups = groups_of(&delegate, &[]);
    assert_eq!(derive_tree_props(&groups).len(), 1);
    let stages: Vec<_> = derive_inter_stage_inputs(&groups)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(stages, ["bounds", "measured"]);
}

#[test]
fn render_data_diffs_come_from_delegates_only() {
    let rdd = |n: &str| {
        MethodParam::RenderDataDiff(RenderDataDiffModel {
            name: n.to_string(),
            type_name: "Integer".into(),
        })
    };
    let delegate = [DelegateMethodModel::delegate(
        DelegateHook::OnCreateTransition,
        "onCreateTransition",
        vec![rdd("width"), rdd("width")],
    )];
    let event = [EventMethodModel::event(
        "onClick",
        EventDeclarationModel::new("ClickEvent", vec![]),
        vec![rdd("height")],
    )];
    let diffs = derive_render_data_diffs(&groups_of(&delegate, &event));
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].name, "width");
}
