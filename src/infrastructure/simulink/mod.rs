//! Simulink model files on disk

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::settings::SIMULINK_MODELS_DIRECTORY_KEY;
use crate::domain::simulink::MODEL_FILE_EXTENSIONS;
use crate::domain::{DomainError, SimulinkModelFile, SimulinkModelRepository};

/// Lists the `.mdl`/`.slx` files of the configured models directory
#[derive(Debug, Clone)]
pub struct FileSystemModelRepository {
    directory: Option<PathBuf>,
}

impl FileSystemModelRepository {
    /// `directory` is `None` when the models directory is not configured
    pub fn new(directory: Option<impl Into<PathBuf>>) -> Self {
        Self {
            directory: directory.map(Into::into),
        }
    }
}

#[async_trait]
impl SimulinkModelRepository for FileSystemModelRepository {
    async fn list(&self) -> Result<Vec<SimulinkModelFile>, DomainError> {
        let directory = self.directory.as_ref().ok_or_else(|| {
            DomainError::configuration(format!(
                "'{}' is not configured",
                SIMULINK_MODELS_DIRECTORY_KEY
            ))
        })?;

        let mut entries = tokio::fs::read_dir(directory).await.map_err(|e| {
            DomainError::configuration(format!(
                "Cannot read models directory '{}': {}",
                directory.display(),
                e
            ))
        })?;

        let mut models = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list models: {}", e)))?
        {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);

            if !is_file {
                continue;
            }

            match SimulinkModelFile::from_path(&path) {
                Some(model) => models.push(model),
                None => debug!(path = %path.display(), "Skipping non-model file"),
            }
        }

        // `.slx` wins over `.mdl` when a model exists in both formats
        models.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| format_rank(a).cmp(&format_rank(b)))
                .then_with(|| a.path().cmp(b.path()))
        });
        models.dedup_by(|a, b| a.name() == b.name());

        Ok(models)
    }
}

fn format_rank(model: &SimulinkModelFile) -> usize {
    let extension = model
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    MODEL_FILE_EXTENSIONS
        .iter()
        .position(|known| extension.as_deref() == Some(*known))
        .unwrap_or(MODEL_FILE_EXTENSIONS.len())
}
