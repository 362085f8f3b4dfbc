//! Transport-facing output shapes produced by the use cases.

pub mod categories;
