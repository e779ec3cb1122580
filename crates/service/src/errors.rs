//! Error types shared by the lead services

use leads_storage::StorageError;
use leads_types::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadServiceError {
	#[error("validation error: {0}")]
	Validation(#[from] ValidationErrors),
	#[error("storage error: {0}")]
	Storage(String),
}

impl From<StorageError> for LeadServiceError {
	fn from(err: StorageError) -> Self {
		LeadServiceError::Storage(err.to_string())
	}
}

pub type LeadServiceResult<T> = Result<T, LeadServiceError>;
