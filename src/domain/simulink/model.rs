//! Simulink model files known to the adapter

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::DomainError;

/// File extensions of Simulink model files, preferred format first
pub const MODEL_FILE_EXTENSIONS: [&str; 2] = ["slx", "mdl"];

/// Simulink model names follow MATLAB identifier rules
static MODEL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,62}$").unwrap());

/// Name of a Simulink model, used as the service provider identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct SimulinkModelName(String);

impl SimulinkModelName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if !MODEL_NAME_PATTERN.is_match(&name) {
            return Err(DomainError::validation(format!(
                "'{}' is not a valid Simulink model name",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SimulinkModelName> for String {
    fn from(name: SimulinkModelName) -> Self {
        name.0
    }
}

impl fmt::Display for SimulinkModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A model file found in the models directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulinkModelFile {
    name: SimulinkModelName,
    path: PathBuf,
}

impl SimulinkModelFile {
    pub fn new(name: SimulinkModelName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }

    /// Recognize a model file by extension and derive its model name from the stem
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        if !MODEL_FILE_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }

        let stem = path.file_stem()?.to_str()?;
        let name = SimulinkModelName::new(stem).ok()?;
        Some(Self::new(name, path))
    }

    pub fn name(&self) -> &SimulinkModelName {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Source of the Simulink models that get a service provider
#[async_trait]
pub trait SimulinkModelRepository: Send + Sync + std::fmt::Debug {
    /// All models, sorted by name
    async fn list(&self) -> Result<Vec<SimulinkModelFile>, DomainError>;

    /// Look up a single model by name
    async fn get(&self, name: &SimulinkModelName) -> Result<Option<SimulinkModelFile>, DomainError> {
        Ok(self.list().await?.into_iter().find(|m| m.name() == name))
    }
}

pub mod in_memory {
    use super::*;
    use std::sync::RwLock;

    /// In-memory model repository for testing
    #[derive(Debug, Default)]
    pub struct InMemoryModelRepository {
        models: RwLock<Vec<SimulinkModelFile>>,
    }

    impl InMemoryModelRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_model(self, name: &str) -> Self {
            if let Ok(model_name) = SimulinkModelName::new(name) {
                let file = SimulinkModelFile::new(model_name, format!("{}.slx", name));
                self.models.write().unwrap().push(file);
            }
            self
        }
    }

    #[async_trait]
    impl SimulinkModelRepository for InMemoryModelRepository {
        async fn list(&self) -> Result<Vec<SimulinkModelFile>, DomainError> {
            let mut models = self.models.read().unwrap().clone();
            models.sort_by(|a, b| a.name().cmp(b.name()));
            Ok(models)
        }
    }
}
