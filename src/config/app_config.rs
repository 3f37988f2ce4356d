use serde::Deserialize;

use crate::domain::oslc::DEFAULT_REGISTRY_UI_URI;

/// Location of the Simulink settings file, relative to the working directory
pub const DEFAULT_PROPERTIES_PATH: &str = "./configuration/config.properties";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub adapter: AdapterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Options of the OSLC adapter itself
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
    /// Simulink `config.properties` file
    #[serde(default = "default_properties_path")]
    pub properties_path: String,
    /// Public URI of the `/services` root; derived from host and port when unset
    #[serde(default)]
    pub base_uri: Option<String>,
    /// Service provider registry the providers point at
    #[serde(default = "default_registry_uri")]
    pub registry_uri: String,
}

fn default_properties_path() -> String {
    DEFAULT_PROPERTIES_PATH.to_string()
}

fn default_registry_uri() -> String {
    DEFAULT_REGISTRY_UI_URI.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8181,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            properties_path: default_properties_path(),
            base_uri: None,
            registry_uri: default_registry_uri(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Public URI of the services root
    ///
    /// Uses `adapter.base_uri` when set; otherwise `portNumber` from the
    /// Simulink settings (surrounding whitespace ignored), falling back to
    /// the listening port.
    pub fn services_base_uri(&self, port_number: Option<&str>) -> String {
        if let Some(base_uri) = &self.adapter.base_uri {
            return base_uri.trim_end_matches('/').to_string();
        }

        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "localhost",
            host => host,
        };
        let port = port_number
            .map(str::trim)
            .filter(|port| !port.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.server.port.to_string());

        format!("http://{}:{}/services", host, port)
    }
}
