//! OSLC services, query capabilities and creation factories

use serde::Serialize;
use url::Url;

/// Static description of one resource service advertised by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceServiceDescriptor {
    /// Identifier of the service, unique within a provider
    pub name: &'static str,
    /// Namespace of the OSLC domain the service belongs to
    pub domain: &'static str,
    /// Path template relative to the services root, e.g. `{simulinkModelName}/blocks`
    pub path: &'static str,
    /// RDF type of the resources the service handles
    pub resource_type: &'static str,
    /// Shape path relative to the resource shapes root
    pub resource_shape: &'static str,
    pub query_capability: Option<CapabilityDescriptor>,
    pub creation_factory: Option<CapabilityDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    pub title: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryCapability {
    #[serde(rename = "dcterms:title")]
    pub title: String,
    #[serde(rename = "oslc:label")]
    pub label: String,
    #[serde(rename = "oslc:queryBase")]
    pub query_base: Url,
    #[serde(rename = "oslc:resourceShape")]
    pub resource_shape: Url,
    #[serde(rename = "oslc:resourceType")]
    pub resource_types: Vec<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationFactory {
    #[serde(rename = "dcterms:title")]
    pub title: String,
    #[serde(rename = "oslc:label")]
    pub label: String,
    #[serde(rename = "oslc:creation")]
    pub creation: Url,
    #[serde(rename = "oslc:resourceShape")]
    pub resource_shapes: Vec<Url>,
    #[serde(rename = "oslc:resourceType")]
    pub resource_types: Vec<Url>,
}

/// Services grouped under a single OSLC domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    #[serde(rename = "oslc:domain")]
    pub domain: Url,
    #[serde(rename = "oslc:queryCapability")]
    pub query_capabilities: Vec<QueryCapability>,
    #[serde(rename = "oslc:creationFactory")]
    pub creation_factories: Vec<CreationFactory>,
}

impl Service {
    pub fn new(domain: Url) -> Self {
        Self {
            domain,
            query_capabilities: Vec::new(),
            creation_factories: Vec::new(),
        }
    }
}
