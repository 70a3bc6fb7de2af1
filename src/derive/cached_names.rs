use crate::spec::model::SpecModel;

/// Prop and inject-prop names persisted from a previous derivation run.
///
/// Positional: indices `0..props` address the final props, the following indices address
/// inject-props. A missing or short list means "keep the declared name".
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CachedPropNames(Vec<String>);

impl CachedPropNames {
    /// Wrap an ordered list of names.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Override for `index`, if the list is long enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` on a first compilation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in positional order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Names to persist after building `model`: final props, then final inject-props.
    pub fn from_model(model: &SpecModel) -> Self {
        model
            .props()
            .iter()
            .map(|p| p.name.clone())
            .chain(model.inject_props().iter().map(|p| p.name.clone()))
            .collect()
    }
}

impl From<Vec<String>> for CachedPropNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl FromIterator<String> for CachedPropNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
