//! Storage traits for pluggable storage implementations

use async_trait::async_trait;
use leads_types::{ContactInquiry, NewContactInquiry, NewQuoteRequest, QuoteRequest};
use thiserror::Error;

/// Storage error type; a backend that cannot be reached reports `Connection`
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Connection error: {message}")]
	Connection { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
	pub total_contact_inquiries: usize,
	pub total_quote_requests: usize,
}

/// Trait for contact inquiry storage operations
#[async_trait]
pub trait ContactInquiryStorage: Send + Sync {
	/// Assign an id and creation time, store the record and return it
	async fn create_contact_inquiry(
		&self,
		inquiry: NewContactInquiry,
	) -> StorageResult<ContactInquiry>;

	/// All inquiries, most recent first
	async fn get_all_contact_inquiries(&self) -> StorageResult<Vec<ContactInquiry>>;

	/// Get an inquiry by ID
	async fn get_contact_inquiry(&self, id: &str) -> StorageResult<Option<ContactInquiry>>;

	/// Get inquiry count
	async fn count_contact_inquiries(&self) -> StorageResult<usize>;
}

/// Trait for quote request storage operations
#[async_trait]
pub trait QuoteRequestStorage: Send + Sync {
	/// Assign an id and creation time, store the record and return it
	async fn create_quote_request(&self, request: NewQuoteRequest) -> StorageResult<QuoteRequest>;

	/// All quote requests, most recent first
	async fn get_all_quote_requests(&self) -> StorageResult<Vec<QuoteRequest>>;

	/// Get a quote request by ID
	async fn get_quote_request(&self, id: &str) -> StorageResult<Option<QuoteRequest>>;

	/// Get quote request count
	async fn count_quote_requests(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait Storage: ContactInquiryStorage + QuoteRequestStorage {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_contact_inquiries: self.count_contact_inquiries().await?,
			total_quote_requests: self.count_quote_requests().await?,
		})
	}

	/// Short backend name for logs and diagnostics
	fn backend_name(&self) -> &'static str;
}
