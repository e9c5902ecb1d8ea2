//! Business layer for the autogestión backend.
//! - One generic [`crud::CrudService`] handles validation, mapping and
//!   soft-delete bookkeeping for every entity.
//! - Per-entity differences are [`resource::Resource`] impls in [`resources`].
//! - Storage sits behind [`repository::CrudRepository`], with SeaORM and
//!   in-memory implementations.

pub mod errors;
pub mod metrics;
pub mod resource;
pub mod repository;
pub mod memory;
pub mod crud;
pub mod resources;
pub mod registry;
#[cfg(test)]
pub mod test_support;

pub use crud::CrudService;
pub use errors::ServiceError;
pub use registry::Services;
pub use resource::Resource;
