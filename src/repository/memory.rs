//! In-memory repository backed by a `Vec` behind a lock.
//!
//! This is the crate's reference implementation of the search contract and
//! the double the tests run against; production deployments substitute a
//! real store behind the same traits.

use std::sync::RwLock;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::pagination::{PageResult, SearchCriteria, SortDirection};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError, RepositoryResult};

/// Repository keeping all categories in process memory.
///
/// Writer methods take `&self` like every other implementation, so the state
/// lives behind an `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out pre-populated, mainly for tests.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, Vec<Category>>> {
        self.categories
            .read()
            .map_err(|e| RepositoryError::Connection(e.to_string()))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, Vec<Category>>> {
        self.categories
            .write()
            .map_err(|e| RepositoryError::Connection(e.to_string()))
    }
}

fn sort_categories(items: &mut [Category], criteria: &SearchCriteria) {
    let field = match criteria.sort.as_deref() {
        None => "name",
        Some(field @ ("name" | "created_at" | "id")) => field,
        Some(other) => {
            log::warn!("Unknown sort field {other:?}, ordering by name");
            "name"
        }
    };

    items.sort_by(|a, b| {
        let ordering = match field {
            "created_at" => a.created_at().cmp(&b.created_at()),
            "id" => a.id().cmp(&b.id()),
            _ => a.name().cmp(b.name()),
        };
        let ordering = match criteria.dir {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        // Stable tie-break so page boundaries are deterministic.
        ordering.then_with(|| a.id().cmp(&b.id()))
    });
}

impl CategoryReader for InMemoryRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        let categories = self.read()?;
        Ok(categories.iter().find(|c| c.id() == id).cloned())
    }

    fn search_categories(
        &self,
        criteria: &SearchCriteria,
    ) -> RepositoryResult<PageResult<Category>> {
        let categories = self.read()?;

        let mut items: Vec<Category> = categories.iter().cloned().collect();
        if let Some(search) = &criteria.search {
            let needle = search.to_lowercase();
            items.retain(|c| c.name().to_lowercase().contains(&needle));
        }
        sort_categories(&mut items, criteria);

        Ok(PageResult::paginate(items, criteria))
    }
}

impl CategoryWriter for InMemoryRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<usize> {
        let mut categories = self.write()?;

        if categories.iter().any(|c| c.id() == category.id()) {
            return Err(RepositoryError::Query(format!(
                "category {} already exists",
                category.id()
            )));
        }

        categories.push(category.clone());
        Ok(1)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<usize> {
        let mut categories = self.write()?;

        match categories.iter_mut().find(|c| c.id() == category.id()) {
            Some(stored) => {
                *stored = category.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut categories = self.write()?;

        let before = categories.len();
        categories.retain(|c| c.id() != id);
        Ok(before - categories.len())
    }
}
