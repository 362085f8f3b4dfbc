//! Category use cases.
//!
//! Each function is generic over the repository traits it needs and takes a
//! [`CancellationToken`]; once the token fires the function stops propagating
//! work and returns [`ServiceError::Cancelled`] instead of a partial result.
//! The token is checked on entry and again after every repository call,
//! before results are mapped.

use tokio_util::sync::CancellationToken;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CreateCategoryForm, DeleteCategoryForm, UpdateCategoryForm};
use crate::pagination::{PageResult, SearchCriteria};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Fetch a single category and project it for transport.
pub fn get_category<R>(
    id: CategoryId,
    repo: &R,
    cancel: &CancellationToken,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let category = match repo.get_category_by_id(id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(e.into());
        }
    };

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    Ok(CategoryDto::from(&category))
}

/// Run the paginated category listing and project each item.
///
/// Pagination metadata comes back from the repository untouched.
pub fn list_categories<R>(
    criteria: SearchCriteria,
    repo: &R,
    cancel: &CancellationToken,
) -> ServiceResult<PageResult<CategoryDto>>
where
    R: CategoryReader,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let page = match repo.search_categories(&criteria) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to search categories: {e}");
            return Err(e.into());
        }
    };

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    Ok(page.map(|category| CategoryDto::from(&category)))
}

/// Create a category from raw input and persist it.
///
/// Invariant violations surface as [`ServiceError::Validation`] carrying the
/// aggregate's canonical rule message.
pub fn create_category<R>(
    form: CreateCategoryForm,
    repo: &R,
    cancel: &CancellationToken,
) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let category = Category::new(form.name, form.description, form.is_active)?;

    if let Err(e) = repo.create_category(&category) {
        log::error!("Failed to create category: {e}");
        return Err(e.into());
    }

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    Ok(CategoryDto::from(&category))
}

/// Rename a category, optionally replacing its description and activation
/// state, then persist the result.
pub fn update_category<R>(
    form: UpdateCategoryForm,
    repo: &R,
    cancel: &CancellationToken,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let id = CategoryId::from(form.id);
    let mut category = match repo.get_category_by_id(id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(e.into());
        }
    };

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    category.update(form.name, form.description)?;
    if let Some(is_active) = form.is_active {
        if is_active {
            category.activate();
        } else {
            category.deactivate();
        }
    }

    if let Err(e) = repo.update_category(&category) {
        log::error!("Failed to update category {id}: {e}");
        return Err(e.into());
    }

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    Ok(CategoryDto::from(&category))
}

/// Delete a category by id.
///
/// The aggregate carries no deleted state; deletion acts on the id through
/// the writer trait.
pub fn delete_category<R>(
    form: DeleteCategoryForm,
    repo: &R,
    cancel: &CancellationToken,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    let id = CategoryId::from(form.id);
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(e.into());
        }
    }

    if cancel.is_cancelled() {
        return Err(ServiceError::Cancelled);
    }

    if let Err(e) = repo.delete_category(id) {
        log::error!("Failed to delete category {id}: {e}");
        return Err(e.into());
    }

    Ok(())
}
