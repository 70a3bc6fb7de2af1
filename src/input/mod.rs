//! JSON spec documents handed over by language front-ends.

pub(crate) mod document;
