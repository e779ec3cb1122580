//! Storage double that fails every call

use async_trait::async_trait;
use leads_storage::{
	ContactInquiryStorage, QuoteRequestStorage, Storage, StorageError, StorageResult,
};
use leads_types::{ContactInquiry, NewContactInquiry, NewQuoteRequest, QuoteRequest};

pub struct FailingStore;

fn unavailable<T>() -> StorageResult<T> {
	Err(StorageError::Connection {
		message: "backend unavailable".to_string(),
	})
}

#[async_trait]
impl ContactInquiryStorage for FailingStore {
	async fn create_contact_inquiry(&self, _: NewContactInquiry) -> StorageResult<ContactInquiry> {
		unavailable()
	}

	async fn get_all_contact_inquiries(&self) -> StorageResult<Vec<ContactInquiry>> {
		unavailable()
	}

	async fn get_contact_inquiry(&self, _: &str) -> StorageResult<Option<ContactInquiry>> {
		unavailable()
	}

	async fn count_contact_inquiries(&self) -> StorageResult<usize> {
		unavailable()
	}
}

#[async_trait]
impl QuoteRequestStorage for FailingStore {
	async fn create_quote_request(&self, _: NewQuoteRequest) -> StorageResult<QuoteRequest> {
		unavailable()
	}

	async fn get_all_quote_requests(&self) -> StorageResult<Vec<QuoteRequest>> {
		unavailable()
	}

	async fn get_quote_request(&self, _: &str) -> StorageResult<Option<QuoteRequest>> {
		unavailable()
	}

	async fn count_quote_requests(&self) -> StorageResult<usize> {
		unavailable()
	}
}

#[async_trait]
impl Storage for FailingStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(false)
	}

	fn backend_name(&self) -> &'static str {
		"failing"
	}
}
