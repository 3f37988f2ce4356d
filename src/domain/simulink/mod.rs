//! Simulink domain - resource kinds, services and model files

mod model;
mod resource;
mod service;
mod service_provider;

pub use model::{
    in_memory::InMemoryModelRepository, SimulinkModelFile, SimulinkModelName,
    SimulinkModelRepository, MODEL_FILE_EXTENSIONS,
};
pub use resource::{
    SimulinkResourceKind, PATH_SIMULINK_BLOCK, PATH_SIMULINK_INPUTPORT, PATH_SIMULINK_LINE,
    PATH_SIMULINK_MODEL, PATH_SIMULINK_OUTPUTPORT, PATH_SIMULINK_PARAMETER,
};
pub use service::{SimulinkService, MODEL_NAME_PARAMETER};
pub use service_provider::{ServiceProviderBuilder, PUBLISHER_IDENTIFIER, PUBLISHER_TITLE};
