use crate::foundation::names::TypeName;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Default value declared for a prop.
pub struct PropDefaultModel {
    /// Prop the default applies to.
    pub name: String,
    /// Declared type of the default.
    pub type_name: TypeName,
    /// Source expression of the default value.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Extra setter to emit on the generated builder.
pub struct BuilderMethodModel {
    /// Setter name.
    pub name: String,
    /// Setter parameter type.
    pub param_type: TypeName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Marker interface tag attached to the generated component.
pub struct TagModel {
    /// Tag type name.
    pub name: TypeName,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Documentation for one prop.
pub struct PropJavadocModel {
    /// Prop name.
    pub name: String,
    /// Documentation text.
    pub javadoc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Generic type parameter of the spec.
pub struct TypeVariable {
    /// Variable name, e.g. `T`.
    pub name: String,
    /// Upper bounds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<TypeName>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Source element a model was derived from; anchors diagnostics.
pub struct SourceAnchor {
    /// Source file (or other origin label).
    pub origin: String,
    /// 1-based line, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based column, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SourceAnchor {
    /// Anchor with no position.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            line: None,
            column: None,
        }
    }

    /// Anchor at `line:column`.
    pub fn at(origin: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            origin: origin.into(),
            line: Some(line),
            column: Some(column),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Marks a spec whose component is constructed through dependency injection.
pub struct DependencyInjectionHelper {
    /// Identifier of the injection framework integration.
    pub provider: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Shape of the element the spec is declared as.
pub enum SpecElementType {
    /// Ordinary class with static methods.
    #[default]
    Class,
    /// Singleton object.
    Singleton,
}
