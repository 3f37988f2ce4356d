//! Service provider catalog

use serde::Serialize;
use url::Url;

use super::service_provider::{Publisher, ServiceProvider};

/// Catalog listing every service provider the adapter currently exposes
#[derive(Debug, Clone, Serialize)]
pub struct ServiceProviderCatalog {
    #[serde(rename = "rdf:about")]
    about: Url,
    #[serde(rename = "dcterms:title")]
    title: String,
    #[serde(rename = "dcterms:description")]
    description: String,
    #[serde(rename = "dcterms:publisher")]
    publisher: Publisher,
    #[serde(rename = "oslc:domain")]
    domains: Vec<Url>,
    #[serde(rename = "oslc:serviceProvider")]
    service_providers: Vec<ServiceProvider>,
}

impl ServiceProviderCatalog {
    pub fn new(
        about: Url,
        title: impl Into<String>,
        description: impl Into<String>,
        publisher: Publisher,
    ) -> Self {
        Self {
            about,
            title: title.into(),
            description: description.into(),
            publisher,
            domains: Vec::new(),
            service_providers: Vec::new(),
        }
    }

    /// Add a provider and record any domain it introduces
    pub fn add_service_provider(&mut self, provider: ServiceProvider) {
        for service in provider.services() {
            if !self.domains.contains(&service.domain) {
                self.domains.push(service.domain.clone());
            }
        }
        self.service_providers.push(provider);
    }

    pub fn about(&self) -> &Url {
        &self.about
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn domains(&self) -> &[Url] {
        &self.domains
    }

    pub fn service_providers(&self) -> &[ServiceProvider] {
        &self.service_providers
    }
}
