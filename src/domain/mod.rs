//! Domain layer - OSLC discovery model, Simulink services, registry and settings

pub mod error;
pub mod oslc;
pub mod registry;
pub mod settings;
pub mod simulink;

pub use error::DomainError;
pub use oslc::{
    PathParameters, PrefixDefinition, Publisher, RegistryUris, ResourceShape, ServiceProvider,
    ServiceProviderCatalog,
};
pub use registry::{EntityProvider, RegisteredClass, ResourceRegistry, ResourceRegistryBuilder};
pub use settings::{SettingsLoad, SettingsStatus, SimulinkSettings};
pub use simulink::{
    InMemoryModelRepository, ServiceProviderBuilder, SimulinkModelFile, SimulinkModelName,
    SimulinkModelRepository, SimulinkResourceKind, SimulinkService,
};
