use super::*;
use crate::model::param::ParamCategory;

const CARD: &str = r#"{
    "qualified_name": "com.example.ui.CardSpec",
    "origin": { "origin": "CardSpec.java", "line": 7, "column": 1 },
    "is_public": true,
    "delegate_methods": [
        {
            "hook": "on_create_layout",
            "name": "onCreateLayout",
            "return_type": "Component",
            "params": [
                { "name": "c", "type": "ComponentContext" },
                { "name": "title", "type": "String", "markers": ["prop"] },
                { "name": "count", "type": "int", "markers": ["state"], "can_update_lazily": true }
            ]
        },
        {
            "hook": "should_update",
            "name": "shouldUpdate",
            "params": [
                { "name": "title", "type": "String", "markers": ["prop", "diff"] }
            ]
        }
    ],
    "update_state_methods": [
        { "name": "increment", "lazy": true, "params": [
            { "name": "count", "type": "int", "markers": ["state"] }
        ] }
    ]
}"#;

#[test]
fn parses_and_classifies_params() {
    let doc = SpecDocument::from_json_str(CARD).unwrap();
    let builder_input = doc.clone();
    assert_eq!(doc.qualified_name, "com.example.ui.CardSpec");

    let delegates: Vec<_> = builder_input
        .delegate_methods
        .unwrap()
        .into_iter()
        .map(DelegateMethodDoc::into_model)
        .collect();
    let categories: Vec<_> = delegates[0].params.iter().map(|p| p.category()).collect();
    assert_eq!(
        categories,
        [ParamCategory::Plain, ParamCategory::Prop, ParamCategory::StateValue]
    );
    assert_eq!(delegates[0].return_type.as_str(), "Component");
    assert_eq!(delegates[1].return_type.as_str(), "void");
    assert_eq!(delegates[1].params[0].category(), ParamCategory::DiffProp);
}

#[test]
fn builds_model_from_document() {
    let model = SpecDocument::from_json_str(CARD).unwrap().build().unwrap();
    assert_eq!(model.component_name(), "Card");
    assert!(model.is_public());
    assert_eq!(model.props().len(), 1);
    assert_eq!(model.props()[0].name, "title");
    assert_eq!(model.state_values().len(), 1);
    assert!(model.state_values()[0].can_update_lazily);
    assert!(model.update_state_methods()[0].kind.lazy);
    assert_eq!(model.represented_object().line, Some(7));
}

#[test]
fn missing_origin_fails_validation() {
    let doc = SpecDocument {
        qualified_name: "com.example.ui.CardSpec".to_string(),
        delegate_methods: Some(vec![]),
        ..SpecDocument::default()
    };
    let err = doc.build().unwrap_err();
    assert!(matches!(err, SpecModelError::Configuration(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SpecDocument::from_json_str("{ \"qualified_name\": 3 }").unwrap_err();
    assert!(matches!(err, SpecModelError::Serde(_)));
    assert!(err.to_string().contains("parse spec document JSON"));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = SpecDocument::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn precomputed_props_document() {
    let json = r#"{
        "qualified_name": "com.example.ui.BadgeSpec",
        "origin": { "origin": "BadgeSpec.java" },
        "props": [ { "name": "label", "type_name": "String", "optional": true } ]
    }"#;
    let model = SpecDocument::from_json_str(json).unwrap().build().unwrap();
    assert_eq!(model.props().len(), 1);
    assert!(model.props()[0].optional);
    assert!(model.delegate_methods().is_empty());
}
