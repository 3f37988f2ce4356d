//! OSLC core - discovery documents, namespaces and the generic provider factory

mod catalog;
pub mod namespace;
mod registry_uris;
mod service;
mod service_provider;
mod shape;
mod uri;

pub use catalog::ServiceProviderCatalog;
pub use namespace::{service_provider_prefixes, PrefixDefinition, SERVICE_PROVIDER_PREFIXES};
pub use registry_uris::{RegistryUris, DEFAULT_REGISTRY_UI_URI};
pub use service::{
    CapabilityDescriptor, CreationFactory, QueryCapability, ResourceServiceDescriptor, Service,
};
pub use service_provider::{
    Publisher, ServiceProvider, ServiceProviderFactory, ServiceProviderInfo,
    PATH_RESOURCE_SHAPES, PATH_SERVICE_PROVIDERS,
};
pub use shape::ResourceShape;
pub use uri::{expand_path_template, join_uri, parse_absolute_uri, PathParameters};
