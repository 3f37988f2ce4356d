//! Builds the service provider advertised for each Simulink model

use url::Url;

use super::service::SimulinkService;
use crate::domain::oslc::{
    parse_absolute_uri, service_provider_prefixes, PathParameters, Publisher, RegistryUris,
    ServiceProvider, ServiceProviderFactory, ServiceProviderInfo,
};
use crate::domain::DomainError;

pub const PUBLISHER_TITLE: &str = "Georgia Institute of Technology OSLC Project";
pub const PUBLISHER_IDENTIFIER: &str = "urn:oslc:ServiceProvider";

/// Creates one OSLC service provider per Simulink model
///
/// Every provider advertises the same six resource services (model, block,
/// input port, output port, line, parameter), a single details link and the
/// fixed set of namespace prefixes. Building is pure: identical inputs yield
/// identical providers.
#[derive(Debug, Clone, Default)]
pub struct ServiceProviderBuilder {
    registry: RegistryUris,
}

impl ServiceProviderBuilder {
    pub fn new(registry: RegistryUris) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RegistryUris {
        &self.registry
    }

    /// Build the provider for `project`
    ///
    /// Fails with a configuration error when `base_uri` is not a valid
    /// absolute URI, and with a framework error when the resource services
    /// cannot be assembled (for example a path parameter is missing).
    pub fn build(
        &self,
        base_uri: &str,
        project: &str,
        path_parameters: &PathParameters,
    ) -> Result<ServiceProvider, DomainError> {
        parse_absolute_uri(base_uri)?;

        let details = format!("{}/details", base_uri);
        parse_absolute_uri(&details)?;
        let details = vec![details];

        let provider = ServiceProviderFactory::create_service_provider(
            ServiceProviderInfo {
                base_uri,
                registration_uri: self.registry.ui_uri(),
                identifier: project,
                title: project.to_string(),
                description: format!("Service provider for Simulink model: {}", project),
                publisher: Publisher::new(PUBLISHER_TITLE, PUBLISHER_IDENTIFIER),
            },
            &SimulinkService::descriptors(),
            path_parameters,
        )?;

        Ok(provider
            .with_details(details)
            .with_prefix_definitions(service_provider_prefixes()?))
    }

    /// Registration URI the providers point at
    pub fn registration_uri(&self) -> &Url {
        self.registry.ui_uri()
    }
}
