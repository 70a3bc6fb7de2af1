use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpecModelError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        SpecModelError::unsupported("context_class")
            .to_string()
            .contains("unsupported accessor: `context_class`")
    );
    assert!(
        SpecModelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_unsupported_is_a_contract_violation() {
    assert!(SpecModelError::unsupported("generate").is_contract_violation());
    assert!(!SpecModelError::configuration("x").is_contract_violation());
    assert!(!SpecModelError::serde("x").is_contract_violation());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpecModelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
