use std::collections::BTreeMap;

use crate::{foundation::names::TypeName, model::param::ParamModel};

/// Identity used for deduplication: name, then declared type.
///
/// Annotations, docs and optionality do not participate.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey {
    name: String,
    type_name: TypeName,
}

impl CanonicalKey {
    /// Key of `param`.
    pub fn of(param: &impl ParamModel) -> Self {
        Self {
            name: param.name().to_string(),
            type_name: param.type_name().clone(),
        }
    }
}

/// Insert-once collection keyed by [`CanonicalKey`].
///
/// Keeps both first-seen order and canonical order; the first insertion of a key wins.
#[derive(Clone, Debug)]
pub(crate) struct CanonicalSet<T> {
    index: BTreeMap<CanonicalKey, usize>,
    items: Vec<T>,
}

impl<T: ParamModel> CanonicalSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            index: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Returns `false` (and drops `item`) when an equal key is already present.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        let key = CanonicalKey::of(&item);
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.items.len());
        self.items.push(item);
        true
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn into_first_seen(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn into_canonical_order(self) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.items.into_iter().map(Some).collect();
        self.index
            .values()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }
}

impl<T: ParamModel> FromIterator<T> for CanonicalSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

#[cfg(test)]
#[path = "../../tests/unit/derive/canonical.rs"]
mod tests;
