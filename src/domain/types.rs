//! Strongly-typed value objects used by the Category aggregate.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary. A wrapper
//! that exists is valid.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when a category invariant is violated.
///
/// The `Display` output of each variant is the canonical, user-facing rule
/// message; callers rely on the exact wording to point at the failing field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name should not be empty or null.")]
    NameEmpty,
    #[error("Name should be at least 3 characters long.")]
    NameTooShort,
    #[error("Name should be less or equal 255 characters long.")]
    NameTooLong,
    #[error("Description should not be empty or null.")]
    DescriptionMissing,
    #[error("Description should be less or equal 10.000 characters long.")]
    DescriptionTooLong,
}

/// Unique identifier for a category.
#[derive(
    Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the raw `Uuid` backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Category display name.
///
/// Not empty or whitespace-only, between [`Self::MIN_CHARS`] and
/// [`Self::MAX_CHARS`] characters. The emptiness check trims; the length
/// checks and the stored value do not.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub const MIN_CHARS: usize = 3;
    pub const MAX_CHARS: usize = 255;

    /// Constructs a validated name, rejecting the first violated rule.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::NameEmpty);
        }
        let chars = value.chars().count();
        if chars < Self::MIN_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::NameTooLong);
        }
        Ok(Self(value))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryName> for &str {
    fn eq(&self, other: &CategoryName) -> bool {
        *self == other.as_str()
    }
}

/// Category description text, at most [`Self::MAX_CHARS`] characters.
///
/// May be empty; absence ("null") is modeled as `Option` at the aggregate
/// boundary, not here.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    pub const MAX_CHARS: usize = 10_000;

    /// Constructs a validated description.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.chars().count() > Self::MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong);
        }
        Ok(Self(value))
    }

    /// Borrow the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryDescription {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryDescription {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryDescription> for String {
    fn from(value: CategoryDescription) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryDescription {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryDescription> for &str {
    fn eq(&self, other: &CategoryDescription) -> bool {
        *self == other.as_str()
    }
}
