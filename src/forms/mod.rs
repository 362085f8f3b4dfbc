//! Deserializable input shapes consumed by the use cases.

pub mod categories;
