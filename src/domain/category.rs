use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::{CategoryDescription, CategoryId, CategoryName, ValidationError};

/// Catalog category aggregate.
///
/// State is private and changes only through the operations below; every
/// constructor and every mutation touching name or description re-runs the
/// invariant checks, so an instance that exists is valid. Checks run in a
/// fixed order and stop at the first violation: name emptiness, name minimum
/// length, name maximum length, description presence, description maximum
/// length.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    description: CategoryDescription,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a category with a fresh identifier and the current timestamp.
    ///
    /// A `None` description is the absent ("null") case and is rejected.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        let (name, description) = Self::validate(name.into(), description)?;

        Ok(Self {
            id: CategoryId::new(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        })
    }

    /// Rebuilds a previously persisted category from its stored fields.
    ///
    /// Runs the same validation as [`Category::new`]: a stored record that no
    /// longer satisfies the invariants must not materialize as an aggregate.
    pub fn restore(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let (name, description) = Self::validate(name.into(), description)?;

        Ok(Self {
            id,
            name,
            description,
            is_active,
            created_at,
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the category active. Idempotent.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Marks the category inactive. Idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Renames the category and, when a description is given, replaces it.
    ///
    /// A `None` description leaves the current one untouched. The proposed
    /// combined state is validated before any field is assigned; on error the
    /// aggregate is unchanged.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), ValidationError> {
        let description =
            description.unwrap_or_else(|| self.description.as_str().to_string());
        let (name, description) = Self::validate(name.into(), Some(description))?;

        self.name = name;
        self.description = description;
        Ok(())
    }

    fn validate(
        name: String,
        description: Option<String>,
    ) -> Result<(CategoryName, CategoryDescription), ValidationError> {
        let name = CategoryName::new(name)?;
        let description = description.ok_or(ValidationError::DescriptionMissing)?;
        let description = CategoryDescription::new(description)?;
        Ok((name, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn valid_category() -> Category {
        Category::new("Category name", Some("Category description".into()), true)
            .expect("valid category")
    }

    #[test]
    fn instantiates_with_fresh_id_and_timestamp() {
        let before = Utc::now();
        let category = valid_category();
        let after = Utc::now();

        assert_eq!(category.name(), "Category name");
        assert_eq!(category.description(), "Category description");
        assert_ne!(category.id().get(), Uuid::nil());
        assert!(category.created_at() >= before);
        assert!(category.created_at() <= after);
        assert!(category.is_active());
    }

    #[test]
    fn instantiates_with_explicit_activation_state() {
        for is_active in [true, false] {
            let category =
                Category::new("Category name", Some("Category description".into()), is_active)
                    .expect("valid category");
            assert_eq!(category.is_active(), is_active);
        }
    }

    #[test]
    fn assigns_a_distinct_id_per_instance() {
        assert_ne!(valid_category().id(), valid_category().id());
    }

    #[test]
    fn rejects_empty_names_on_creation() {
        for name in ["", "   "] {
            let err = Category::new(name, Some("Category description.".into()), true)
                .unwrap_err();
            assert_eq!(err.to_string(), "Name should not be empty or null.");
        }
    }

    #[test]
    fn rejects_names_shorter_than_three_characters_on_creation() {
        for name in ["1", "12", "a", "Ca"] {
            let err = Category::new(name, Some("Category description.".into()), true)
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Name should be at least 3 characters long."
            );
        }
    }

    #[test]
    fn rejects_names_longer_than_255_characters_on_creation() {
        let err = Category::new("a".repeat(256), Some("Category description.".into()), true)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Name should be less or equal 255 characters long."
        );
    }

    #[test]
    fn rejects_missing_descriptions_on_creation() {
        let err = Category::new("Category name", None, true).unwrap_err();
        assert_eq!(err.to_string(), "Description should not be empty or null.");
    }

    #[test]
    fn rejects_descriptions_longer_than_10_000_characters_on_creation() {
        let err = Category::new("Category name", Some("a".repeat(10_001)), true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Description should be less or equal 10.000 characters long."
        );
    }

    #[test]
    fn name_checks_run_before_description_checks() {
        // Both fields invalid: the name rule wins.
        let err = Category::new("", None, true).unwrap_err();
        assert_eq!(err, ValidationError::NameEmpty);

        let err = Category::new("ab", Some("a".repeat(10_001)), true).unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);

        // Name valid: the description-presence rule fires before its length rule.
        let err = Category::new("Category name", None, true).unwrap_err();
        assert_eq!(err, ValidationError::DescriptionMissing);
    }

    #[test]
    fn activate_sets_the_flag_regardless_of_prior_state() {
        let mut category =
            Category::new("Category name", Some("Category description".into()), false)
                .expect("valid category");

        category.activate();
        assert!(category.is_active());
        category.activate();
        assert!(category.is_active());
    }

    #[test]
    fn deactivate_clears_the_flag_regardless_of_prior_state() {
        let mut category = valid_category();

        category.deactivate();
        assert!(!category.is_active());
        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn update_replaces_both_fields() {
        let mut category = valid_category();

        category
            .update("New name", Some("New description".into()))
            .expect("valid update");

        assert_eq!(category.name(), "New name");
        assert_eq!(category.description(), "New description");
    }

    #[test]
    fn update_without_description_keeps_the_current_one() {
        let mut category = valid_category();

        category.update("New name", None).expect("valid update");

        assert_eq!(category.name(), "New name");
        assert_eq!(category.description(), "Category description");
    }

    #[test]
    fn update_applies_the_same_name_rules_as_creation() {
        let mut category = valid_category();

        for (name, message) in [
            ("", "Name should not be empty or null."),
            ("   ", "Name should not be empty or null."),
            ("ab", "Name should be at least 3 characters long."),
        ] {
            let err = category.update(name, None).unwrap_err();
            assert_eq!(err.to_string(), message);
        }

        let err = category.update("a".repeat(256), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Name should be less or equal 255 characters long."
        );
    }

    #[test]
    fn update_rejects_overlong_descriptions() {
        let mut category = valid_category();

        let err = category
            .update("New name", Some("a".repeat(10_001)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Description should be less or equal 10.000 characters long."
        );
    }

    #[test]
    fn failed_update_leaves_the_aggregate_untouched() {
        let mut category = valid_category();

        category
            .update("ab", Some("New description".into()))
            .unwrap_err();

        assert_eq!(category.name(), "Category name");
        assert_eq!(category.description(), "Category description");
    }

    #[test]
    fn deactivate_then_rename_scenario() {
        let mut category = Category::new("Movies", Some("Movie category".into()), true)
            .expect("valid category");
        assert_ne!(category.id().get(), Uuid::nil());
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());

        category.update("Series", None).expect("valid update");
        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), "Movie category");
    }

    #[test]
    fn restore_keeps_the_stored_identity() {
        let id = CategoryId::new();
        let created_at = Utc::now();

        let category = Category::restore(
            id,
            "Category name",
            Some("Category description".into()),
            false,
            created_at,
        )
        .expect("valid category");

        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), created_at);
        assert!(!category.is_active());
    }

    #[test]
    fn restore_revalidates_stored_fields() {
        let err = Category::restore(CategoryId::new(), "ab", Some("x".into()), true, Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);

        let err =
            Category::restore(CategoryId::new(), "Category name", None, true, Utc::now())
                .unwrap_err();
        assert_eq!(err, ValidationError::DescriptionMissing);
    }
}
