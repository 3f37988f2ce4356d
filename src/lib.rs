//! Simulink OSLC Adapter
//!
//! Exposes Simulink models and their blocks, ports, lines and parameters as
//! OSLC resources:
//! - A service provider per Simulink model, listed in a catalog
//! - Resource shapes for the six Simulink resource kinds
//! - A one-time bootstrap that registers resources and reads
//!   `configuration/config.properties`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::path::PathBuf;
use std::sync::Arc;

use api::state::AppState;
use domain::oslc::parse_absolute_uri;
use domain::{RegistryUris, ServiceProviderBuilder};
use infrastructure::{
    application::{BootstrapOptions, OslcApplication},
    services::CatalogService,
    simulink::FileSystemModelRepository,
};
use tracing::{info, warn};

/// Bootstrap the adapter once and build the handler state
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let application = OslcApplication::initialize(&BootstrapOptions {
        properties_path: PathBuf::from(&config.adapter.properties_path),
    })?;

    create_app_state_with_application(config, application)
}

/// Build the handler state around an already bootstrapped application
pub fn create_app_state_with_application(
    config: &AppConfig,
    application: Arc<OslcApplication>,
) -> anyhow::Result<AppState> {
    let settings = application.settings();
    let base_uri = config.services_base_uri(settings.port_number());
    let registry = RegistryUris::new(&config.adapter.registry_uri)?;

    match parse_absolute_uri(&base_uri) {
        Ok(_) => info!(base_uri = %base_uri, "Serving OSLC services"),
        Err(e) => warn!(
            base_uri = %base_uri,
            error = %e,
            "Services base URI is invalid; discovery requests will fail"
        ),
    }

    let models = Arc::new(FileSystemModelRepository::new(
        settings.simulink_models_directory(),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        base_uri,
        ServiceProviderBuilder::new(registry),
        models,
        application.registry().clone(),
    ));

    Ok(AppState::new(application, catalog_service))
}
