use catalog_core::domain::category::Category;
use catalog_core::domain::types::CategoryId;
use catalog_core::repository::memory::InMemoryRepository;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

/// Deterministic fixture: fixed id and timestamp derived from `n`.
pub fn stored_category(n: u32, name: &str) -> Category {
    Category::restore(
        CategoryId::from(Uuid::from_u128(n as u128 + 1)),
        name,
        Some(format!("{name} description")),
        true,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, n / 60, n % 60).unwrap(),
    )
    .expect("valid category fixture")
}

/// Repository seeded with `count` categories named `Category 00` onwards.
pub fn seeded_repository(count: u32) -> InMemoryRepository {
    InMemoryRepository::with_categories(
        (0..count)
            .map(|n| stored_category(n, &format!("Category {n:02}")))
            .collect(),
    )
}
