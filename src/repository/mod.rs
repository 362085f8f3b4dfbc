//! Persistence contracts consumed by the use cases.
//!
//! The core does not implement storage; external collaborators provide it by
//! implementing the traits below. [`memory`] ships an in-memory
//! implementation that doubles as the executable reference for the search
//! contract.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::pagination::{PageResult, SearchCriteria};

pub mod errors;
pub mod memory;

pub use errors::{RepositoryError, RepositoryResult};

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;

    /// Run a paged, filtered, sorted query over categories.
    ///
    /// Implementations must count `total` before pagination and return
    /// `min(per_page, total - offset)` items for an in-range page; a page
    /// past the end yields empty items, not an error. Equal sort keys are
    /// ordered by id so page boundaries stay deterministic across calls.
    fn search_categories(&self, criteria: &SearchCriteria)
    -> RepositoryResult<PageResult<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category. Returns the number of records created.
    fn create_category(&self, category: &Category) -> RepositoryResult<usize>;

    /// Persist the current state of an existing category. Returns the number
    /// of records updated; 0 means the id is unknown to the store.
    fn update_category(&self, category: &Category) -> RepositoryResult<usize>;

    /// Delete a category by id. Returns the number of records removed.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}
