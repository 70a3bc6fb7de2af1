//! Derivation passes: classification, extraction, dedup/renaming and synthetic methods.

pub(crate) mod cached_names;
pub(crate) mod canonical;
pub(crate) mod classify;
pub(crate) mod extract;
pub(crate) mod props;
pub(crate) mod synthetic;
pub(crate) mod values;
