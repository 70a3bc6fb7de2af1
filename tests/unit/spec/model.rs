use super::*;
use crate::model::param::MethodParam;

fn model() -> SpecModel {
    SpecModel::builder()
        .qualified_spec_name("com.example.ui.CardSpec")
        .delegate_methods(vec![DelegateMethodModel::delegate(
            crate::model::method::DelegateHook::OnCreateLayout,
            "onCreateLayout",
            vec![MethodParam::Prop(PropModel::new("title", "String"))],
        )])
        .represented_object(SourceAnchor::new("CardSpec.java"))
        .build()
        .unwrap()
}

#[test]
fn unsupported_accessors_fail_every_time() {
    let m = model();
    for _ in 0..2 {
        assert!(m.context_class().unwrap_err().is_contract_violation());
        assert!(m.state_container_class().unwrap_err().is_contract_violation());
        assert!(m.update_state_interface().unwrap_err().is_contract_violation());
        assert!(m.scope_method_name().unwrap_err().is_contract_violation());
        assert!(m.is_styling_supported().unwrap_err().is_contract_violation());
        assert!(
            m.should_check_id_in_is_equivalent_to_method()
                .unwrap_err()
                .is_contract_violation()
        );
        assert!(m.has_deep_copy().unwrap_err().is_contract_violation());
        assert!(m.should_generate_has_state().unwrap_err().is_contract_violation());
        assert!(m.validate().unwrap_err().is_contract_violation());
        assert!(m.generate().unwrap_err().is_contract_violation());
    }
}

#[test]
fn unsupported_error_names_the_accessor() {
    let err = model().generate().unwrap_err();
    assert!(matches!(err, SpecModelError::Unsupported { accessor: "generate" }));
    assert!(err.to_string().contains("`generate`"));
}

#[test]
fn accessors_are_stable() {
    let m = model();
    assert_eq!(m.props(), m.props());
    assert_eq!(m.state_values(), m.state_values());
    assert_eq!(m.event_methods(), m.event_methods());
    assert_eq!(m.props()[0].name, "title");
}

#[test]
fn method_groups_view_model_methods() {
    let m = model();
    let groups = m.method_groups();
    assert_eq!(groups.delegate.len(), 1);
    assert!(groups.event.is_empty());
    assert_eq!(groups.params().count(), 1);
}

#[test]
fn clone_compares_equal() {
    let m = model();
    assert_eq!(m.clone(), m);
}
