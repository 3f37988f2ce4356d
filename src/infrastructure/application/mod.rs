//! Adapter bootstrap - registry population and settings load
//!
//! `OslcApplication::bootstrap` builds the resource registry and reads the
//! Simulink settings file. It runs `Uninitialized -> Loading -> Ready` on
//! success and `Uninitialized -> Loading -> Failed` when the registry is
//! rejected. An unreadable settings file does not fail the bootstrap.
//!
//! `OslcApplication::initialize` guards the bootstrap so it runs at most
//! once per process; the resulting handle is passed to the HTTP layer.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{error, info};

use crate::config::DEFAULT_PROPERTIES_PATH;
use crate::domain::{
    DomainError, ResourceRegistry, SettingsLoad, SettingsStatus, SimulinkSettings,
};
use crate::infrastructure::settings::PropertiesFileLoader;

static APPLICATION: OnceCell<Arc<OslcApplication>> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Inputs of the bootstrap
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub properties_path: PathBuf,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from(DEFAULT_PROPERTIES_PATH),
        }
    }
}

/// Registry and settings shared by every request, read-only after bootstrap
#[derive(Debug)]
pub struct OslcApplication {
    registry: ResourceRegistry,
    settings: SimulinkSettings,
    settings_load: SettingsLoad,
    state: BootstrapState,
}

impl OslcApplication {
    /// Run the bootstrap with the default registry
    pub fn bootstrap(options: &BootstrapOptions) -> Result<Self, DomainError> {
        Self::bootstrap_with(options, ResourceRegistry::simulink)
    }

    /// Run the bootstrap with a custom registry source
    pub fn bootstrap_with<F>(options: &BootstrapOptions, registry: F) -> Result<Self, DomainError>
    where
        F: FnOnce() -> Result<ResourceRegistry, DomainError>,
    {
        let mut state = BootstrapState::Uninitialized;
        transition(&mut state, BootstrapState::Loading);

        let registry = match registry() {
            Ok(registry) => registry,
            Err(e) => {
                transition(&mut state, BootstrapState::Failed);
                error!(error = %e, "Resource registration rejected");
                return Err(e);
            }
        };

        info!(
            classes = registry.classes().len(),
            shapes = registry.shape_paths().len(),
            "Resource registry populated"
        );

        let settings_load = PropertiesFileLoader::new(&options.properties_path).load();
        let settings = settings_load.settings();

        transition(&mut state, BootstrapState::Ready);

        Ok(Self {
            registry,
            settings,
            settings_load,
            state,
        })
    }

    /// Bootstrap once per process and return the shared handle
    ///
    /// Later calls return the first result and ignore their options.
    pub fn initialize(options: &BootstrapOptions) -> Result<Arc<Self>, DomainError> {
        APPLICATION
            .get_or_try_init(|| Self::bootstrap(options).map(Arc::new))
            .cloned()
    }

    /// The process-wide handle, if `initialize` succeeded
    pub fn get() -> Option<Arc<Self>> {
        APPLICATION.get().cloned()
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &SimulinkSettings {
        &self.settings
    }

    pub fn settings_load(&self) -> &SettingsLoad {
        &self.settings_load
    }

    pub fn settings_status(&self) -> SettingsStatus {
        self.settings_load.status()
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }
}

fn transition(state: &mut BootstrapState, next: BootstrapState) {
    info!(from = %state, to = %next, "Bootstrap state change");
    *state = next;
}
