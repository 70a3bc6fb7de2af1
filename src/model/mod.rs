//! Typed inputs of the derivation engine: classified params, methods and spec metadata.

pub(crate) mod metadata;
pub(crate) mod method;
pub(crate) mod param;
