//! Application services that combine the domain with the adapter's resources

mod catalog_service;

pub use catalog_service::{CatalogService, PATH_CATALOG};
