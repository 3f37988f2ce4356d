//! Simulink resource kinds

use std::fmt;

use serde::Serialize;

pub const PATH_SIMULINK_MODEL: &str = "model";
pub const PATH_SIMULINK_BLOCK: &str = "block";
pub const PATH_SIMULINK_INPUTPORT: &str = "inputPort";
pub const PATH_SIMULINK_OUTPUTPORT: &str = "outputPort";
pub const PATH_SIMULINK_LINE: &str = "line";
pub const PATH_SIMULINK_PARAMETER: &str = "parameter";

pub const SIMULINK_MODEL_TYPE: &str = "http://mathworks.com/simulink/rdf#Model";
pub const SIMULINK_BLOCK_TYPE: &str = "http://mathworks.com/simulink/rdf#Block";
pub const SIMULINK_INPUTPORT_TYPE: &str = "http://mathworks.com/simulink/rdf#InputPort";
pub const SIMULINK_OUTPUTPORT_TYPE: &str = "http://mathworks.com/simulink/rdf#OutputPort";
pub const SIMULINK_LINE_TYPE: &str = "http://mathworks.com/simulink/rdf#Line";
pub const SIMULINK_PARAMETER_TYPE: &str = "http://mathworks.com/simulink/rdf#Parameter";

/// Artifact types of a Simulink model that the adapter exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SimulinkResourceKind {
    Model,
    Block,
    InputPort,
    OutputPort,
    Line,
    Parameter,
}

impl SimulinkResourceKind {
    pub const ALL: [SimulinkResourceKind; 6] = [
        Self::Model,
        Self::Block,
        Self::InputPort,
        Self::OutputPort,
        Self::Line,
        Self::Parameter,
    ];

    /// Path segment of the resource shape
    pub fn shape_path(&self) -> &'static str {
        match self {
            Self::Model => PATH_SIMULINK_MODEL,
            Self::Block => PATH_SIMULINK_BLOCK,
            Self::InputPort => PATH_SIMULINK_INPUTPORT,
            Self::OutputPort => PATH_SIMULINK_OUTPUTPORT,
            Self::Line => PATH_SIMULINK_LINE,
            Self::Parameter => PATH_SIMULINK_PARAMETER,
        }
    }

    /// Local name of the RDF type within the Simulink vocabulary
    pub fn local_name(&self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Block => "Block",
            Self::InputPort => "InputPort",
            Self::OutputPort => "OutputPort",
            Self::Line => "Line",
            Self::Parameter => "Parameter",
        }
    }

    /// RDF type URI
    pub fn type_uri(&self) -> &'static str {
        match self {
            Self::Model => SIMULINK_MODEL_TYPE,
            Self::Block => SIMULINK_BLOCK_TYPE,
            Self::InputPort => SIMULINK_INPUTPORT_TYPE,
            Self::OutputPort => SIMULINK_OUTPUTPORT_TYPE,
            Self::Line => SIMULINK_LINE_TYPE,
            Self::Parameter => SIMULINK_PARAMETER_TYPE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Model => "Simulink Model",
            Self::Block => "Simulink Block",
            Self::InputPort => "Simulink Input Port",
            Self::OutputPort => "Simulink Output Port",
            Self::Line => "Simulink Line",
            Self::Parameter => "Simulink Parameter",
        }
    }

    pub fn from_shape_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.shape_path() == path)
    }
}

impl fmt::Display for SimulinkResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oslc::namespace::SIMULINK_NAMESPACE;

    #[test]
    fn test_shape_path_round_trip() {
        for kind in SimulinkResourceKind::ALL {
            assert_eq!(SimulinkResourceKind::from_shape_path(kind.shape_path()), Some(kind));
        }
        assert_eq!(SimulinkResourceKind::from_shape_path("subsystem"), None);
    }

    #[test]
    fn test_type_uri_is_in_simulink_namespace() {
        for kind in SimulinkResourceKind::ALL {
            assert_eq!(
                kind.type_uri(),
                format!("{}{}", SIMULINK_NAMESPACE, kind.local_name())
            );
        }
    }

    #[test]
    fn test_type_uri() {
        assert_eq!(
            SimulinkResourceKind::InputPort.type_uri(),
            "http://mathworks.com/simulink/rdf#InputPort"
        );
    }
}
