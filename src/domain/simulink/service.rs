//! The six Simulink resource services

use std::fmt;

use serde::Serialize;

use super::resource::SimulinkResourceKind;
use crate::domain::oslc::namespace::OSLC_DATA_NAMESPACE;
use crate::domain::oslc::{CapabilityDescriptor, ResourceServiceDescriptor};

/// Path parameter naming the Simulink model a service provider describes
pub const MODEL_NAME_PARAMETER: &str = "simulinkModelName";

/// REST service advertised for every Simulink model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SimulinkService {
    Block,
    InputPort,
    OutputPort,
    Model,
    Line,
    Parameter,
}

impl SimulinkService {
    /// Registration order of the services on a provider
    pub const ALL: [SimulinkService; 6] = [
        Self::Block,
        Self::InputPort,
        Self::OutputPort,
        Self::Model,
        Self::Line,
        Self::Parameter,
    ];

    pub fn resource_kind(&self) -> SimulinkResourceKind {
        match self {
            Self::Block => SimulinkResourceKind::Block,
            Self::InputPort => SimulinkResourceKind::InputPort,
            Self::OutputPort => SimulinkResourceKind::OutputPort,
            Self::Model => SimulinkResourceKind::Model,
            Self::Line => SimulinkResourceKind::Line,
            Self::Parameter => SimulinkResourceKind::Parameter,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Block => "SimulinkBlockService",
            Self::InputPort => "SimulinkInputPortService",
            Self::OutputPort => "SimulinkOutputPortService",
            Self::Model => "SimulinkModelService",
            Self::Line => "SimulinkLineService",
            Self::Parameter => "SimulinkParameterService",
        }
    }

    /// Path template relative to the services root
    pub fn path(&self) -> &'static str {
        match self {
            Self::Block => "{simulinkModelName}/blocks",
            Self::InputPort => "{simulinkModelName}/inputports",
            Self::OutputPort => "{simulinkModelName}/outputports",
            Self::Model => "{simulinkModelName}/model",
            Self::Line => "{simulinkModelName}/lines",
            Self::Parameter => "{simulinkModelName}/parameters",
        }
    }

    pub fn descriptor(&self) -> ResourceServiceDescriptor {
        let kind = self.resource_kind();
        let (query_capability, creation_factory) = match self {
            Self::Block => (
                capability("Simulink Block Query Capability", "Simulink Block Query"),
                capability("Simulink Block Creation Factory", "Simulink Block Creation"),
            ),
            Self::InputPort => (
                capability("Simulink Input Port Query Capability", "Simulink Input Port Query"),
                capability(
                    "Simulink Input Port Creation Factory",
                    "Simulink Input Port Creation",
                ),
            ),
            Self::OutputPort => (
                capability(
                    "Simulink Output Port Query Capability",
                    "Simulink Output Port Query",
                ),
                capability(
                    "Simulink Output Port Creation Factory",
                    "Simulink Output Port Creation",
                ),
            ),
            // A model is the provider itself; it can be queried but not created
            Self::Model => (
                capability("Simulink Model Query Capability", "Simulink Model Query"),
                None,
            ),
            Self::Line => (
                capability("Simulink Line Query Capability", "Simulink Line Query"),
                capability("Simulink Line Creation Factory", "Simulink Line Creation"),
            ),
            Self::Parameter => (
                capability("Simulink Parameter Query Capability", "Simulink Parameter Query"),
                capability(
                    "Simulink Parameter Creation Factory",
                    "Simulink Parameter Creation",
                ),
            ),
        };

        ResourceServiceDescriptor {
            name: self.name(),
            domain: OSLC_DATA_NAMESPACE,
            path: self.path(),
            resource_type: kind.type_uri(),
            resource_shape: kind.shape_path(),
            query_capability,
            creation_factory,
        }
    }

    /// Descriptors of all six services, in registration order
    pub fn descriptors() -> Vec<ResourceServiceDescriptor> {
        Self::ALL.iter().map(|service| service.descriptor()).collect()
    }
}

fn capability(title: &'static str, label: &'static str) -> Option<CapabilityDescriptor> {
    Some(CapabilityDescriptor { title, label })
}

impl fmt::Display for SimulinkService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_services_cover_every_resource_kind() {
        let kinds: HashSet<SimulinkResourceKind> =
            SimulinkService::ALL.iter().map(|s| s.resource_kind()).collect();
        assert_eq!(kinds.len(), SimulinkResourceKind::ALL.len());
    }

    #[test]
    fn test_paths_use_model_name_parameter() {
        let placeholder = format!("{{{}}}", MODEL_NAME_PARAMETER);
        for service in SimulinkService::ALL {
            assert!(service.path().starts_with(&placeholder), "{}", service);
        }
    }

    #[test]
    fn test_model_service_has_no_creation_factory() {
        let descriptor = SimulinkService::Model.descriptor();
        assert!(descriptor.query_capability.is_some());
        assert!(descriptor.creation_factory.is_none());

        let descriptor = SimulinkService::Line.descriptor();
        assert!(descriptor.creation_factory.is_some());
        assert_eq!(descriptor.resource_shape, "line");
    }
}
