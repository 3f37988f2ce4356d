//! Simulink adapter settings read from `config.properties`

use serde::Serialize;

use super::properties::parse_properties;
use crate::domain::DomainError;

pub const SIMULINK_ECORE_LOCATION_KEY: &str = "simulinkEcoreLocation";
pub const SIMULINK_MODELS_DIRECTORY_KEY: &str = "simulinkModelsDirectory";
pub const PORT_NUMBER_KEY: &str = "portNumber";

/// Locations of the Simulink metamodel and model files, plus the public port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulinkSettings {
    simulink_ecore_location: Option<String>,
    /// Always ends with `/` when present
    simulink_models_directory: Option<String>,
    /// Kept verbatim; not parsed as a number
    port_number: Option<String>,
}

impl SimulinkSettings {
    /// Read settings from raw property-file text
    ///
    /// Every backslash is turned into a forward slash before parsing so that
    /// Windows paths typed by users stay usable in URIs.
    pub fn from_properties(text: &str) -> SettingsLoad {
        let normalized = text.replace('\\', "/");
        let properties = parse_properties(&normalized);

        let settings = Self {
            simulink_ecore_location: properties.get(SIMULINK_ECORE_LOCATION_KEY).cloned(),
            simulink_models_directory: properties
                .get(SIMULINK_MODELS_DIRECTORY_KEY)
                .map(|dir| with_trailing_slash(dir)),
            port_number: properties.get(PORT_NUMBER_KEY).cloned(),
        };

        let missing = settings.missing_keys();
        if missing.is_empty() {
            SettingsLoad::Loaded(settings)
        } else {
            SettingsLoad::Partial { settings, missing }
        }
    }

    pub fn simulink_ecore_location(&self) -> Option<&str> {
        self.simulink_ecore_location.as_deref()
    }

    pub fn simulink_models_directory(&self) -> Option<&str> {
        self.simulink_models_directory.as_deref()
    }

    pub fn port_number(&self) -> Option<&str> {
        self.port_number.as_deref()
    }

    /// Models directory, or a configuration error naming the missing key
    pub fn require_models_directory(&self) -> Result<&str, DomainError> {
        self.simulink_models_directory().ok_or_else(|| {
            DomainError::configuration(format!("'{}' is not configured", SIMULINK_MODELS_DIRECTORY_KEY))
        })
    }

    /// Ecore metamodel location, or a configuration error naming the missing key
    pub fn require_ecore_location(&self) -> Result<&str, DomainError> {
        self.simulink_ecore_location().ok_or_else(|| {
            DomainError::configuration(format!("'{}' is not configured", SIMULINK_ECORE_LOCATION_KEY))
        })
    }

    fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.simulink_ecore_location.is_none() {
            missing.push(SIMULINK_ECORE_LOCATION_KEY);
        }
        if self.simulink_models_directory.is_none() {
            missing.push(SIMULINK_MODELS_DIRECTORY_KEY);
        }
        if self.port_number.is_none() {
            missing.push(PORT_NUMBER_KEY);
        }

        missing
    }
}

fn with_trailing_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{}/", dir)
    }
}

/// Outcome of reading the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLoad {
    /// Every key was present
    Loaded(SimulinkSettings),
    /// The file was read but some keys were absent
    Partial {
        settings: SimulinkSettings,
        missing: Vec<&'static str>,
    },
    /// The file could not be read; settings stay unset
    Failed { reason: String },
}

impl SettingsLoad {
    /// Settings to run with; unset when loading failed
    pub fn settings(&self) -> SimulinkSettings {
        match self {
            Self::Loaded(settings) | Self::Partial { settings, .. } => settings.clone(),
            Self::Failed { .. } => SimulinkSettings::default(),
        }
    }

    pub fn status(&self) -> SettingsStatus {
        match self {
            Self::Loaded(_) => SettingsStatus::Loaded,
            Self::Partial { .. } => SettingsStatus::Partial,
            Self::Failed { .. } => SettingsStatus::Failed,
        }
    }

    /// Keys that were not found, or all keys when the file was unreadable
    pub fn missing_keys(&self) -> Vec<&'static str> {
        match self {
            Self::Loaded(_) => Vec::new(),
            Self::Partial { missing, .. } => missing.clone(),
            Self::Failed { .. } => vec![
                SIMULINK_ECORE_LOCATION_KEY,
                SIMULINK_MODELS_DIRECTORY_KEY,
                PORT_NUMBER_KEY,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsStatus {
    Loaded,
    Partial,
    Failed,
}
