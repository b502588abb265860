use std::path::{Path, PathBuf};

use thiserror::Error;

use super::content_store::ContentStoreError;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error(transparent)]
    Content(#[from] ContentStoreError),
    #[error("failed to write `{}`", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl InfraError {
    pub fn write_output(path: &Path, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
