//! OSLC vocabulary namespaces and prefix bindings

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::domain::DomainError;

pub const DCTERMS_NAMESPACE: &str = "http://purl.org/dc/terms/";
pub const DCTERMS_NAMESPACE_PREFIX: &str = "dcterms";

pub const OSLC_CORE_NAMESPACE: &str = "http://open-services.net/ns/core#";
pub const OSLC_CORE_NAMESPACE_PREFIX: &str = "oslc";

pub const OSLC_DATA_NAMESPACE: &str = "http://open-services.net/ns/servicemanagement/1.0/";
pub const OSLC_DATA_NAMESPACE_PREFIX: &str = "oslc_data";

pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDF_NAMESPACE_PREFIX: &str = "rdf";

pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const RDFS_NAMESPACE_PREFIX: &str = "rdfs";

pub const CHANGE_MANAGEMENT_NAMESPACE: &str = "http://open-services.net/ns/cm#";
pub const CHANGE_MANAGEMENT_NAMESPACE_PREFIX: &str = "oslc_cm";

pub const FOAF_NAMESPACE: &str = "http://xmlns.com/foaf/0.1/";
pub const FOAF_NAMESPACE_PREFIX: &str = "foaf";

pub const QUALITY_MANAGEMENT_NAMESPACE: &str = "http://open-services.net/ns/qm#";
pub const QUALITY_MANAGEMENT_PREFIX: &str = "oslc_qm";

pub const REQUIREMENTS_MANAGEMENT_NAMESPACE: &str = "http://open-services.net/ns/rm#";
pub const REQUIREMENTS_MANAGEMENT_PREFIX: &str = "oslc_rm";

pub const SOFTWARE_CONFIGURATION_MANAGEMENT_NAMESPACE: &str = "http://open-services.net/ns/scm#";
pub const SOFTWARE_CONFIGURATION_MANAGEMENT_PREFIX: &str = "oslc_scm";

pub const SIMULINK_NAMESPACE: &str = "http://mathworks.com/simulink/rdf#";
pub const SIMULINK_PREFIX: &str = "simulink";

/// Prefix/namespace pairs every Simulink service provider advertises
pub const SERVICE_PROVIDER_PREFIXES: [(&str, &str); 11] = [
    (DCTERMS_NAMESPACE_PREFIX, DCTERMS_NAMESPACE),
    (OSLC_CORE_NAMESPACE_PREFIX, OSLC_CORE_NAMESPACE),
    (OSLC_DATA_NAMESPACE_PREFIX, OSLC_DATA_NAMESPACE),
    (RDF_NAMESPACE_PREFIX, RDF_NAMESPACE),
    (RDFS_NAMESPACE_PREFIX, RDFS_NAMESPACE),
    (CHANGE_MANAGEMENT_NAMESPACE_PREFIX, CHANGE_MANAGEMENT_NAMESPACE),
    (FOAF_NAMESPACE_PREFIX, FOAF_NAMESPACE),
    (QUALITY_MANAGEMENT_PREFIX, QUALITY_MANAGEMENT_NAMESPACE),
    (REQUIREMENTS_MANAGEMENT_PREFIX, REQUIREMENTS_MANAGEMENT_NAMESPACE),
    (
        SOFTWARE_CONFIGURATION_MANAGEMENT_PREFIX,
        SOFTWARE_CONFIGURATION_MANAGEMENT_NAMESPACE,
    ),
    (SIMULINK_PREFIX, SIMULINK_NAMESPACE),
];

/// XML NCName restricted to ASCII, which is what serialized prefixes must be
static PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.-]*$").unwrap());

/// Binding of a short prefix to a vocabulary URI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrefixDefinition {
    #[serde(rename = "oslc:prefix")]
    prefix: String,
    #[serde(rename = "oslc:prefixBase")]
    prefix_base: Url,
}

impl PrefixDefinition {
    pub fn new(prefix: impl Into<String>, namespace: &str) -> Result<Self, DomainError> {
        let prefix = prefix.into();

        if !PREFIX_PATTERN.is_match(&prefix) {
            return Err(DomainError::configuration(format!(
                "Invalid namespace prefix '{}'",
                prefix
            )));
        }

        let prefix_base = Url::parse(namespace).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid namespace URI '{}' for prefix '{}': {}",
                namespace, prefix, e
            ))
        })?;

        Ok(Self {
            prefix,
            prefix_base,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn prefix_base(&self) -> &Url {
        &self.prefix_base
    }
}

impl fmt::Display for PrefixDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: <{}>", self.prefix, self.prefix_base)
    }
}

/// Build the prefix bindings advertised by every Simulink service provider
pub fn service_provider_prefixes() -> Result<Vec<PrefixDefinition>, DomainError> {
    SERVICE_PROVIDER_PREFIXES
        .iter()
        .map(|(prefix, namespace)| PrefixDefinition::new(*prefix, namespace))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_provider_prefixes_are_unique() {
        let prefixes = service_provider_prefixes().unwrap();
        let unique: HashSet<&str> = prefixes.iter().map(|p| p.prefix()).collect();

        assert_eq!(prefixes.len(), 11);
        assert_eq!(unique.len(), 11);
    }

    #[test]
    fn test_prefix_definition_keeps_namespace() {
        let def = PrefixDefinition::new("rdf", RDF_NAMESPACE).unwrap();
        assert_eq!(def.prefix(), "rdf");
        assert_eq!(def.prefix_base().as_str(), RDF_NAMESPACE);
        assert_eq!(def.to_string(), format!("rdf: <{}>", RDF_NAMESPACE));
    }

    #[test]
    fn test_prefix_definition_rejects_bad_prefix() {
        let result = PrefixDefinition::new("1abc", FOAF_NAMESPACE);
        assert!(result.unwrap_err().is_configuration());

        let result = PrefixDefinition::new("has space", FOAF_NAMESPACE);
        assert!(result.is_err());
    }

    #[test]
    fn test_prefix_definition_rejects_relative_namespace() {
        let result = PrefixDefinition::new("local", "relative/path#");
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_prefix_definition_serialization() {
        let def = PrefixDefinition::new("foaf", FOAF_NAMESPACE).unwrap();
        let json = serde_json::to_string(&def).unwrap();

        assert!(json.contains("\"oslc:prefix\":\"foaf\""));
        assert!(json.contains("\"oslc:prefixBase\":\"http://xmlns.com/foaf/0.1/\""));
    }
}
