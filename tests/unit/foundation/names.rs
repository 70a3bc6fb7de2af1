use super::*;

#[test]
fn simple_name_and_package_split_on_last_dot() {
    assert_eq!(simple_name("com.example.ui.CardSpec"), "CardSpec");
    assert_eq!(package_prefix("com.example.ui.CardSpec"), "com.example.ui.");
    assert_eq!(simple_name("CardSpec"), "CardSpec");
    assert_eq!(package_prefix("CardSpec"), "");
}

#[test]
fn component_name_drops_spec_suffix() {
    assert_eq!(
        component_type_name("com.example.ui.CardSpec", None),
        "com.example.ui.Card"
    );
    assert_eq!(component_type_name("Plain", None), "Plain");
}

#[test]
fn component_name_override_keeps_package() {
    assert_eq!(
        component_type_name("com.example.ui.CardSpec", Some("FancyCard")),
        "com.example.ui.FancyCard"
    );
    assert_eq!(
        component_type_name("com.example.ui.CardSpec", Some("  ")),
        "com.example.ui.Card"
    );
}

#[test]
fn type_name_wraps_and_displays() {
    let t = TypeName::new("String");
    assert_eq!(t.wrapped_in("Diff").as_str(), "Diff<String>");
    assert_eq!(t.to_string(), "String");
}
