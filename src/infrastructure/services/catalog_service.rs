//! Catalog service - service providers for the Simulink models on disk

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::domain::oslc::{join_uri, PathParameters, PATH_RESOURCE_SHAPES};
use crate::domain::simulink::{MODEL_NAME_PARAMETER, PUBLISHER_IDENTIFIER, PUBLISHER_TITLE};
use crate::domain::{
    DomainError, Publisher, ResourceRegistry, ResourceShape, ServiceProvider,
    ServiceProviderBuilder, ServiceProviderCatalog, SimulinkModelName, SimulinkModelRepository,
    SimulinkResourceKind,
};

/// Path of the catalog below the services root
pub const PATH_CATALOG: &str = "catalog/singleton";

/// Builds catalog, provider and shape documents on request
#[derive(Debug)]
pub struct CatalogService {
    base_uri: String,
    builder: ServiceProviderBuilder,
    models: Arc<dyn SimulinkModelRepository>,
    registry: ResourceRegistry,
}

impl CatalogService {
    pub fn new(
        base_uri: impl Into<String>,
        builder: ServiceProviderBuilder,
        models: Arc<dyn SimulinkModelRepository>,
        registry: ResourceRegistry,
    ) -> Self {
        Self {
            base_uri: base_uri.into(),
            builder,
            models,
            registry,
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Catalog with one provider per model file
    pub async fn catalog(&self) -> Result<ServiceProviderCatalog, DomainError> {
        let about = join_uri(&self.base_uri, PATH_CATALOG)?;
        let mut catalog = ServiceProviderCatalog::new(
            about,
            "OSLC Simulink Service Provider Catalog",
            "Service providers for the Simulink models of this adapter",
            Publisher::new(PUBLISHER_TITLE, PUBLISHER_IDENTIFIER),
        );

        let models = self.models.list().await?;
        debug!(count = models.len(), "Building service provider catalog");

        for model in models {
            catalog.add_service_provider(self.build_provider(model.name())?);
        }

        Ok(catalog)
    }

    /// Provider of a single model
    pub async fn service_provider(&self, model: &str) -> Result<ServiceProvider, DomainError> {
        // A name no model file could carry is simply an unknown model
        let name = SimulinkModelName::new(model).map_err(|e| match e {
            DomainError::Validation { message } => DomainError::not_found(message),
            other => other,
        })?;

        self.models
            .get(&name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Simulink model '{}' not found", model)))?;

        self.build_provider(&name)
    }

    /// Shapes of every registered resource kind
    pub fn resource_shapes(&self) -> Result<Vec<ResourceShape>, DomainError> {
        self.registry
            .shape_paths()
            .iter()
            .map(|(path, kind)| self.shape(path, *kind))
            .collect()
    }

    /// Shape registered under `path`
    pub fn resource_shape(&self, path: &str) -> Result<ResourceShape, DomainError> {
        let kind = self
            .registry
            .resolve_shape(path)
            .ok_or_else(|| DomainError::not_found(format!("Resource shape '{}' not found", path)))?;

        self.shape(path, kind)
    }

    fn shape(&self, path: &str, kind: SimulinkResourceKind) -> Result<ResourceShape, DomainError> {
        Ok(ResourceShape {
            about: join_uri(&self.base_uri, &format!("{}/{}", PATH_RESOURCE_SHAPES, path))?,
            title: kind.title().to_string(),
            describes: Url::parse(kind.type_uri()).map_err(|e| {
                DomainError::internal(format!("Invalid type URI '{}': {}", kind.type_uri(), e))
            })?,
        })
    }

    fn build_provider(&self, name: &SimulinkModelName) -> Result<ServiceProvider, DomainError> {
        let mut params = PathParameters::new();
        params.insert(MODEL_NAME_PARAMETER.to_string(), name.to_string());

        self.builder.build(&self.base_uri, name.as_str(), &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InMemoryModelRepository;

    const BASE_URI: &str = "http://localhost:8181/services";

    fn service(models: InMemoryModelRepository) -> CatalogService {
        CatalogService::new(
            BASE_URI,
            ServiceProviderBuilder::default(),
            Arc::new(models),
            ResourceRegistry::simulink().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_catalog_lists_one_provider_per_model() {
        let service = service(
            InMemoryModelRepository::new()
                .with_model("plant")
                .with_model("controller"),
        );

        let catalog = service.catalog().await.unwrap();
        let titles: Vec<&str> = catalog.service_providers().iter().map(|p| p.title()).collect();

        assert_eq!(catalog.about().as_str(), "http://localhost:8181/services/catalog/singleton");
        assert_eq!(titles, vec!["controller", "plant"]);
        assert_eq!(catalog.domains().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let catalog = service(InMemoryModelRepository::new()).catalog().await.unwrap();
        assert!(catalog.service_providers().is_empty());
        assert!(catalog.domains().is_empty());
    }

    #[tokio::test]
    async fn test_service_provider_for_known_model() {
        let service = service(InMemoryModelRepository::new().with_model("plant"));
        let provider = service.service_provider("plant").await.unwrap();

        assert_eq!(
            provider.about().as_str(),
            "http://localhost:8181/services/serviceProviders/plant"
        );
        assert_eq!(provider.details()[0], "http://localhost:8181/services/details");
    }

    #[tokio::test]
    async fn test_service_provider_for_unknown_model() {
        let service = service(InMemoryModelRepository::new().with_model("plant"));

        let err = service.service_provider("other").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = service.service_provider("../plant").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_base_uri_surfaces_configuration_error() {
        let service = CatalogService::new(
            "http://localhost:eighty/services",
            ServiceProviderBuilder::default(),
            Arc::new(InMemoryModelRepository::new().with_model("plant")),
            ResourceRegistry::simulink().unwrap(),
        );

        let err = service.service_provider("plant").await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_resource_shapes() {
        let service = service(InMemoryModelRepository::new());

        let shapes = service.resource_shapes().unwrap();
        assert_eq!(shapes.len(), 6);

        let shape = service.resource_shape("outputPort").unwrap();
        assert_eq!(
            shape.about.as_str(),
            "http://localhost:8181/services/resourceShapes/outputPort"
        );
        assert_eq!(shape.describes.as_str(), "http://mathworks.com/simulink/rdf#OutputPort");
        assert_eq!(shape.title, "Simulink Output Port");

        assert!(matches!(
            service.resource_shape("subsystem").unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
