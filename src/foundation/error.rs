/// Convenience result type used across the derivation engine.
pub type SpecModelResult<T> = Result<T, SpecModelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpecModelError {
    /// Missing or conflicting builder input; fatal for the compilation unit.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Accessor that this simplified model variant does not provide.
    #[error("unsupported accessor: `{accessor}` is not available on this model variant")]
    Unsupported {
        /// Name of the accessor that was invoked.
        accessor: &'static str,
    },

    /// Errors when serializing or deserializing spec documents or models.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpecModelError {
    /// Build a [`SpecModelError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SpecModelError::Unsupported`] value.
    pub fn unsupported(accessor: &'static str) -> Self {
        Self::Unsupported { accessor }
    }

    /// Build a [`SpecModelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors that signal a caller contract violation rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
