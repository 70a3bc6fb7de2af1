use std::fmt;

/// Suffix every spec class name is expected to carry.
pub const SPEC_SUFFIX: &str = "Spec";

/// A declared type signature, e.g. `String` or `List<Item>`.
///
/// Two params are canonically equal only if their type names are equal as written.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Wrap a declared type signature.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The signature as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap this type in a generic container, e.g. `Diff<T>`.
    pub fn wrapped_in(&self, container: &str) -> Self {
        Self(format!("{container}<{}>", self.0))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Last dotted segment of a qualified name.
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Package prefix of a qualified name including the trailing dot, or `""`.
pub fn package_prefix(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[..=idx],
        None => "",
    }
}

/// Qualified component name for a spec.
///
/// With no override the `Spec` suffix is dropped; names without the suffix are kept as-is.
/// An override replaces the simple name and keeps the spec's package.
pub fn component_type_name(qualified_spec_name: &str, override_name: Option<&str>) -> String {
    match override_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => format!("{}{name}", package_prefix(qualified_spec_name)),
        None => qualified_spec_name
            .strip_suffix(SPEC_SUFFIX)
            .unwrap_or(qualified_spec_name)
            .to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/names.rs"]
mod tests;
