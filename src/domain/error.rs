use color_eyre::eyre::Report;
use thiserror::Error;

use super::SeedStoreError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Not enough valid members or projects to proceed with assignments.")]
    InsufficientData {
        members: usize,
        projects: usize,
        required_members: usize,
        required_projects: usize,
    },
    #[error("Store error")]
    Store(#[from] SeedStoreError),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
