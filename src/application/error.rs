use thiserror::Error;

use crate::{
    application::related::RankError,
    config::LoadError,
    domain::error::DomainError,
    infra::{content_store::ContentStoreError, error::InfraError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error("failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to load configuration")]
    Configuration(#[from] LoadError),
}

impl AppError {
    /// Messages for this error and every source below it, outermost first.
    pub fn chain(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut current = std::error::Error::source(self);
        while let Some(inner) = current {
            let message = inner.to_string();
            if messages.last() != Some(&message) {
                messages.push(message);
            }
            current = inner.source();
        }
        messages
    }
}

impl From<ContentStoreError> for AppError {
    fn from(error: ContentStoreError) -> Self {
        Self::Infra(InfraError::from(error))
    }
}
