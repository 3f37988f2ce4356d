//! Loads the Simulink settings file from disk

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::domain::{SettingsLoad, SimulinkSettings};

/// Reads `config.properties` once and reports what it found
#[derive(Debug, Clone)]
pub struct PropertiesFileLoader {
    path: PathBuf,
}

impl PropertiesFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    ///
    /// Never fails: an unreadable file is logged and reported as
    /// `SettingsLoad::Failed` so start-up can continue.
    pub fn load(&self) -> SettingsLoad {
        debug!(path = %self.path.display(), "Reading Simulink settings");

        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read Simulink settings; continuing without them"
                );
                return SettingsLoad::Failed {
                    reason: format!("{}: {}", self.path.display(), e),
                };
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        let load = SimulinkSettings::from_properties(&text);

        match &load {
            SettingsLoad::Loaded(_) => {
                info!(path = %self.path.display(), "Simulink settings loaded");
            }
            SettingsLoad::Partial { missing, .. } => {
                warn!(
                    path = %self.path.display(),
                    missing = ?missing,
                    "Simulink settings loaded with missing keys"
                );
            }
            SettingsLoad::Failed { .. } => {}
        }

        load
    }
}
