//! Application core for the catalog administration service.
//!
//! This crate owns the `Category` aggregate, the generic paginated-search
//! contract and the use cases that orchestrate them over an abstract
//! repository. Persistence and transport are external collaborators: they
//! implement the traits in [`repository`] and speak to the core through the
//! shapes in [`forms`] and [`dto`].

pub mod domain;
pub mod dto;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod services;
