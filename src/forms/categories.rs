use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, SearchCriteria, SortDirection};

fn default_is_active() -> bool {
    true
}

/// Input for creating a category.
///
/// `is_active` defaults to true unless the caller sets it explicitly. Name
/// and description pass through raw; their invariants live in the aggregate,
/// whose rule messages are the canonical ones.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryForm {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Input for updating a category.
///
/// An omitted `description` leaves the stored one untouched; an omitted
/// `is_active` leaves the activation state untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryForm {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Input for deleting a category by id.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCategoryForm {
    pub id: Uuid,
}

/// Input for the paginated category listing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListCategoriesForm {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub per_page: Option<usize>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
}

#[derive(Debug, Error)]
pub enum ListCategoriesFormError {
    #[error("List categories form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for ListCategoriesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<ListCategoriesForm> for SearchCriteria {
    type Error = ListCategoriesFormError;

    fn try_from(value: ListCategoriesForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(SearchCriteria {
            page: value.page.unwrap_or(1),
            per_page: value.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            search: value.search,
            sort: value.sort,
            dir: value.dir.unwrap_or_default(),
        })
    }
}
