//! Service provider descriptor and the generic factory that assembles it

use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use super::namespace::PrefixDefinition;
use super::service::{CreationFactory, QueryCapability, ResourceServiceDescriptor, Service};
use super::uri::{expand_path_template, join_uri, parse_absolute_uri, PathParameters};
use crate::domain::DomainError;

/// Path segment under the services root where resource shapes are published
pub const PATH_RESOURCE_SHAPES: &str = "resourceShapes";

/// Path segment under the services root where service providers are published
pub const PATH_SERVICE_PROVIDERS: &str = "serviceProviders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publisher {
    #[serde(rename = "dcterms:title")]
    title: String,
    #[serde(rename = "dcterms:identifier")]
    identifier: String,
}

impl Publisher {
    pub fn new(title: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            identifier: identifier.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// OSLC discovery document for a single project
#[derive(Debug, Clone, Serialize)]
pub struct ServiceProvider {
    #[serde(rename = "rdf:about")]
    about: Url,
    #[serde(rename = "dcterms:title")]
    title: String,
    #[serde(rename = "dcterms:description")]
    description: String,
    #[serde(rename = "dcterms:publisher")]
    publisher: Publisher,
    /// Verbatim `base_uri + "/details"`, never normalized
    #[serde(rename = "oslc:details")]
    details: Vec<String>,
    #[serde(rename = "oslc:prefixDefinition")]
    prefix_definitions: Vec<PrefixDefinition>,
    #[serde(rename = "oslc:service")]
    services: Vec<Service>,
    #[serde(skip)]
    base_uri: Url,
    #[serde(skip)]
    registration_uri: Url,
    #[serde(skip)]
    resource_classes: Vec<&'static str>,
    #[serde(skip)]
    path_parameters: PathParameters,
}

impl ServiceProvider {
    pub fn about(&self) -> &Url {
        &self.about
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn prefix_definitions(&self) -> &[PrefixDefinition] {
        &self.prefix_definitions
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    pub fn registration_uri(&self) -> &Url {
        &self.registration_uri
    }

    /// Names of the resource services this provider advertises
    pub fn resource_classes(&self) -> &[&'static str] {
        &self.resource_classes
    }

    pub fn path_parameters(&self) -> &PathParameters {
        &self.path_parameters
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_prefix_definitions(mut self, prefix_definitions: Vec<PrefixDefinition>) -> Self {
        self.prefix_definitions = prefix_definitions;
        self
    }
}

/// Fields every service provider needs besides its resource services
#[derive(Debug, Clone)]
pub struct ServiceProviderInfo<'a> {
    pub base_uri: &'a str,
    pub registration_uri: &'a Url,
    pub identifier: &'a str,
    pub title: String,
    pub description: String,
    pub publisher: Publisher,
}

/// Generic provider assembly: one `Service` per domain, one capability per descriptor
pub struct ServiceProviderFactory;

impl ServiceProviderFactory {
    pub fn create_service_provider(
        info: ServiceProviderInfo<'_>,
        resource_classes: &[ResourceServiceDescriptor],
        path_parameters: &PathParameters,
    ) -> Result<ServiceProvider, DomainError> {
        let base_uri = parse_absolute_uri(info.base_uri)?;

        if resource_classes.is_empty() {
            return Err(DomainError::framework(
                "A service provider needs at least one resource service",
            ));
        }

        let mut seen = HashSet::new();
        for descriptor in resource_classes {
            if !seen.insert(descriptor.name) {
                return Err(DomainError::framework(format!(
                    "Resource service '{}' registered twice",
                    descriptor.name
                )));
            }
        }

        let mut services: Vec<Service> = Vec::new();

        for descriptor in resource_classes {
            let domain = Url::parse(descriptor.domain).map_err(|e| {
                DomainError::framework(format!(
                    "Invalid domain '{}' on '{}': {}",
                    descriptor.domain, descriptor.name, e
                ))
            })?;

            let index = match services.iter().position(|s| s.domain == domain) {
                Some(index) => index,
                None => {
                    services.push(Service::new(domain));
                    services.len() - 1
                }
            };

            Self::add_capabilities(&mut services[index], info.base_uri, descriptor, path_parameters)?;
        }

        let about = join_uri(
            info.base_uri,
            &format!("{}/{}", PATH_SERVICE_PROVIDERS, info.identifier),
        )?;

        Ok(ServiceProvider {
            about,
            title: info.title,
            description: info.description,
            publisher: info.publisher,
            details: Vec::new(),
            prefix_definitions: Vec::new(),
            services,
            base_uri,
            registration_uri: info.registration_uri.clone(),
            resource_classes: resource_classes.iter().map(|d| d.name).collect(),
            path_parameters: path_parameters.clone(),
        })
    }

    fn add_capabilities(
        service: &mut Service,
        base_uri: &str,
        descriptor: &ResourceServiceDescriptor,
        path_parameters: &PathParameters,
    ) -> Result<(), DomainError> {
        let path = expand_path_template(descriptor.path, path_parameters)?;
        let endpoint = join_uri(base_uri, &path)?;
        let shape = join_uri(
            base_uri,
            &format!("{}/{}", PATH_RESOURCE_SHAPES, descriptor.resource_shape),
        )?;
        let resource_type = Url::parse(descriptor.resource_type).map_err(|e| {
            DomainError::framework(format!(
                "Invalid resource type '{}' on '{}': {}",
                descriptor.resource_type, descriptor.name, e
            ))
        })?;

        if let Some(query) = descriptor.query_capability {
            service.query_capabilities.push(QueryCapability {
                title: query.title.to_string(),
                label: query.label.to_string(),
                query_base: endpoint.clone(),
                resource_shape: shape.clone(),
                resource_types: vec![resource_type.clone()],
            });
        }

        if let Some(creation) = descriptor.creation_factory {
            service.creation_factories.push(CreationFactory {
                title: creation.title.to_string(),
                label: creation.label.to_string(),
                creation: endpoint,
                resource_shapes: vec![shape],
                resource_types: vec![resource_type],
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oslc::service::CapabilityDescriptor;

    const WIDGETS: ResourceServiceDescriptor = ResourceServiceDescriptor {
        name: "WidgetService",
        domain: "http://example.com/ns/widgets#",
        path: "{project}/widgets",
        resource_type: "http://example.com/ns/widgets#Widget",
        resource_shape: "widget",
        query_capability: Some(CapabilityDescriptor {
            title: "Widget Query",
            label: "Widgets",
        }),
        creation_factory: Some(CapabilityDescriptor {
            title: "Widget Factory",
            label: "New widget",
        }),
    };

    const GADGETS: ResourceServiceDescriptor = ResourceServiceDescriptor {
        name: "GadgetService",
        domain: "http://example.com/ns/widgets#",
        path: "{project}/gadgets",
        resource_type: "http://example.com/ns/widgets#Gadget",
        resource_shape: "gadget",
        query_capability: Some(CapabilityDescriptor {
            title: "Gadget Query",
            label: "Gadgets",
        }),
        creation_factory: None,
    };

    fn registration() -> Url {
        Url::parse("http://localhost:8080/registry/ui").unwrap()
    }

    fn info<'a>(base_uri: &'a str, registration: &'a Url) -> ServiceProviderInfo<'a> {
        ServiceProviderInfo {
            base_uri,
            registration_uri: registration,
            identifier: "demo",
            title: "demo".to_string(),
            description: "Demo provider".to_string(),
            publisher: Publisher::new("Example", "urn:example"),
        }
    }

    fn params() -> PathParameters {
        let mut params = PathParameters::new();
        params.insert("project".to_string(), "demo".to_string());
        params
    }

    #[test]
    fn test_groups_services_by_domain() {
        let registration = registration();
        let provider = ServiceProviderFactory::create_service_provider(
            info("http://localhost:8080/services", &registration),
            &[WIDGETS, GADGETS],
            &params(),
        )
        .unwrap();

        assert_eq!(provider.services().len(), 1);
        let service = &provider.services()[0];
        assert_eq!(service.query_capabilities.len(), 2);
        assert_eq!(service.creation_factories.len(), 1);
        assert_eq!(
            service.query_capabilities[0].query_base.as_str(),
            "http://localhost:8080/services/demo/widgets"
        );
        assert_eq!(
            service.creation_factories[0].resource_shapes[0].as_str(),
            "http://localhost:8080/services/resourceShapes/widget"
        );
        assert_eq!(
            provider.about().as_str(),
            "http://localhost:8080/services/serviceProviders/demo"
        );
        assert_eq!(provider.resource_classes(), &["WidgetService", "GadgetService"]);
    }

    #[test]
    fn test_rejects_empty_resource_classes() {
        let registration = registration();
        let err = ServiceProviderFactory::create_service_provider(
            info("http://localhost:8080/services", &registration),
            &[],
            &params(),
        )
        .unwrap_err();

        assert!(err.is_framework());
    }

    #[test]
    fn test_rejects_duplicate_resource_classes() {
        let registration = registration();
        let err = ServiceProviderFactory::create_service_provider(
            info("http://localhost:8080/services", &registration),
            &[WIDGETS, WIDGETS],
            &params(),
        )
        .unwrap_err();

        assert!(err.is_framework());
        assert!(err.to_string().contains("WidgetService"));
    }

    #[test]
    fn test_rejects_missing_path_parameter() {
        let registration = registration();
        let err = ServiceProviderFactory::create_service_provider(
            info("http://localhost:8080/services", &registration),
            &[WIDGETS],
            &PathParameters::new(),
        )
        .unwrap_err();

        assert!(err.is_framework());
    }

    #[test]
    fn test_rejects_invalid_base_uri() {
        let registration = registration();
        let err = ServiceProviderFactory::create_service_provider(
            info("not a uri", &registration),
            &[WIDGETS],
            &params(),
        )
        .unwrap_err();

        assert!(err.is_configuration());
    }
}
