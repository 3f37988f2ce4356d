//! Well-known URIs of the service provider registry

use url::Url;

use super::uri::parse_absolute_uri;
use crate::domain::DomainError;

pub const DEFAULT_REGISTRY_UI_URI: &str = "http://localhost:8080/OSLC4JRegistry/ui";

/// Location of the registry that service providers register with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUris {
    ui: Url,
}

impl RegistryUris {
    pub fn new(ui: &str) -> Result<Self, DomainError> {
        Ok(Self {
            ui: parse_absolute_uri(ui)?,
        })
    }

    pub fn ui_uri(&self) -> &Url {
        &self.ui
    }
}

impl Default for RegistryUris {
    fn default() -> Self {
        Self {
            ui: Url::parse(DEFAULT_REGISTRY_UI_URI).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_uri() {
        assert_eq!(RegistryUris::default().ui_uri().as_str(), DEFAULT_REGISTRY_UI_URI);
    }

    #[test]
    fn test_invalid_registry_uri() {
        assert!(RegistryUris::new("::").unwrap_err().is_configuration());
    }
}
