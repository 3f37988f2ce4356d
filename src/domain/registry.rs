//! Resource registry handed to the HTTP host at start-up

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::simulink::{SimulinkResourceKind, SimulinkService};
use super::DomainError;

/// Serializer that turns resources into a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityProvider {
    Json,
}

impl EntityProvider {
    pub const ALL: [EntityProvider; 1] = [Self::Json];

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// Anything the host must know about to route or serialize requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum RegisteredClass {
    EntityProvider(EntityProvider),
    CatalogService,
    ServiceProviderService,
    Service(SimulinkService),
    Resource(SimulinkResourceKind),
    ElementsToCreate,
}

impl fmt::Display for RegisteredClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityProvider(provider) => write!(f, "EntityProvider({})", provider.media_type()),
            Self::CatalogService => write!(f, "ServiceProviderCatalogService"),
            Self::ServiceProviderService => write!(f, "ServiceProviderService"),
            Self::Service(service) => write!(f, "{}", service.name()),
            Self::Resource(kind) => write!(f, "Simulink{}", kind.local_name()),
            Self::ElementsToCreate => write!(f, "SimulinkElementsToCreate"),
        }
    }
}

/// Registered classes plus the shape path of every resource kind
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    classes: Vec<RegisteredClass>,
    shape_paths: Vec<(String, SimulinkResourceKind)>,
}

impl ResourceRegistry {
    pub fn builder() -> ResourceRegistryBuilder {
        ResourceRegistryBuilder::default()
    }

    /// The table every adapter instance starts with
    pub fn simulink() -> Result<Self, DomainError> {
        let mut builder = Self::builder();

        for provider in EntityProvider::ALL {
            builder = builder.register(RegisteredClass::EntityProvider(provider))?;
        }

        builder = builder
            .register(RegisteredClass::CatalogService)?
            .register(RegisteredClass::ServiceProviderService)?
            .register(RegisteredClass::Service(SimulinkService::Model))?
            .register(RegisteredClass::Service(SimulinkService::Block))?
            .register(RegisteredClass::Service(SimulinkService::InputPort))?
            .register(RegisteredClass::Service(SimulinkService::OutputPort))?
            .register(RegisteredClass::Service(SimulinkService::Line))?
            .register(RegisteredClass::Service(SimulinkService::Parameter))?
            .register(RegisteredClass::Resource(SimulinkResourceKind::Block))?
            .register(RegisteredClass::Resource(SimulinkResourceKind::Line))?
            .register(RegisteredClass::Resource(SimulinkResourceKind::Parameter))?
            .register(RegisteredClass::ElementsToCreate)?;

        for kind in SimulinkResourceKind::ALL {
            builder = builder.shape(kind.shape_path(), kind)?;
        }

        Ok(builder.build())
    }

    pub fn classes(&self) -> &[RegisteredClass] {
        &self.classes
    }

    pub fn contains(&self, class: &RegisteredClass) -> bool {
        self.classes.contains(class)
    }

    /// Shape path bindings in registration order
    pub fn shape_paths(&self) -> &[(String, SimulinkResourceKind)] {
        &self.shape_paths
    }

    pub fn resolve_shape(&self, path: &str) -> Option<SimulinkResourceKind> {
        self.shape_paths
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, kind)| *kind)
    }

    /// Media types that some registered provider can produce
    pub fn media_types(&self) -> Vec<&'static str> {
        self.classes
            .iter()
            .filter_map(|class| match class {
                RegisteredClass::EntityProvider(provider) => Some(provider.media_type()),
                _ => None,
            })
            .collect()
    }
}

/// Builder that rejects duplicate registrations
#[derive(Debug, Default)]
pub struct ResourceRegistryBuilder {
    classes: Vec<RegisteredClass>,
    seen_classes: HashSet<RegisteredClass>,
    shape_paths: Vec<(String, SimulinkResourceKind)>,
}

impl ResourceRegistryBuilder {
    pub fn register(mut self, class: RegisteredClass) -> Result<Self, DomainError> {
        if !self.seen_classes.insert(class) {
            return Err(DomainError::framework(format!(
                "Class '{}' is already registered",
                class
            )));
        }
        self.classes.push(class);
        Ok(self)
    }

    pub fn shape(mut self, path: impl Into<String>, kind: SimulinkResourceKind) -> Result<Self, DomainError> {
        let path = path.into();

        if path.is_empty() || path.contains('/') {
            return Err(DomainError::framework(format!(
                "Invalid resource shape path '{}'",
                path
            )));
        }

        if self.shape_paths.iter().any(|(p, _)| *p == path) {
            return Err(DomainError::framework(format!(
                "Resource shape path '{}' is already registered",
                path
            )));
        }

        if self.shape_paths.iter().any(|(_, k)| *k == kind) {
            return Err(DomainError::framework(format!(
                "Resource '{}' already has a shape path",
                kind
            )));
        }

        self.shape_paths.push((path, kind));
        Ok(self)
    }

    pub fn build(self) -> ResourceRegistry {
        ResourceRegistry {
            classes: self.classes,
            shape_paths: self.shape_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulink_registry_has_six_unique_shape_paths() {
        let registry = ResourceRegistry::simulink().unwrap();

        let paths: HashSet<&str> = registry.shape_paths().iter().map(|(p, _)| p.as_str()).collect();
        let kinds: HashSet<SimulinkResourceKind> =
            registry.shape_paths().iter().map(|(_, k)| *k).collect();

        assert_eq!(registry.shape_paths().len(), 6);
        assert_eq!(paths.len(), 6);
        assert_eq!(kinds.len(), 6);
    }

    #[test]
    fn test_simulink_registry_classes() {
        let registry = ResourceRegistry::simulink().unwrap();

        assert!(registry.contains(&RegisteredClass::EntityProvider(EntityProvider::Json)));
        assert!(registry.contains(&RegisteredClass::CatalogService));
        assert!(registry.contains(&RegisteredClass::ServiceProviderService));
        for service in SimulinkService::ALL {
            assert!(registry.contains(&RegisteredClass::Service(service)));
        }
        assert!(registry.contains(&RegisteredClass::ElementsToCreate));
        assert_eq!(registry.classes().len(), 13);
        assert_eq!(registry.media_types(), vec!["application/json"]);
    }

    #[test]
    fn test_resolve_shape() {
        let registry = ResourceRegistry::simulink().unwrap();

        assert_eq!(registry.resolve_shape("inputPort"), Some(SimulinkResourceKind::InputPort));
        assert_eq!(registry.resolve_shape("subsystem"), None);
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let err = ResourceRegistry::builder()
            .register(RegisteredClass::CatalogService)
            .unwrap()
            .register(RegisteredClass::CatalogService)
            .unwrap_err();

        assert!(err.is_framework());
        assert!(err.to_string().contains("ServiceProviderCatalogService"));
    }

    #[test]
    fn test_duplicate_shape_path_rejected() {
        let err = ResourceRegistry::builder()
            .shape("block", SimulinkResourceKind::Block)
            .unwrap()
            .shape("block", SimulinkResourceKind::Line)
            .unwrap_err();

        assert!(err.is_framework());
    }

    #[test]
    fn test_shape_path_for_kind_registered_once() {
        let err = ResourceRegistry::builder()
            .shape("block", SimulinkResourceKind::Block)
            .unwrap()
            .shape("otherBlock", SimulinkResourceKind::Block)
            .unwrap_err();

        assert!(err.is_framework());
    }

    #[test]
    fn test_invalid_shape_path_rejected() {
        assert!(ResourceRegistry::builder().shape("", SimulinkResourceKind::Model).is_err());
        assert!(ResourceRegistry::builder().shape("a/b", SimulinkResourceKind::Model).is_err());
    }
}
