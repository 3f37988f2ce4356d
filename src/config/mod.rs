mod app_config;

pub use app_config::{
    AdapterConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig, DEFAULT_PROPERTIES_PATH,
};
