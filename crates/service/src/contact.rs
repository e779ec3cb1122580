//! Contact inquiry service
//!
//! Validates contact form submissions and hands them to storage.

use std::sync::Arc;

use leads_storage::Storage;
use leads_types::{ContactInquiry, NewContactInquiry};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::LeadServiceResult;

#[derive(Clone)]
pub struct ContactService {
	storage: Arc<dyn Storage>,
}

impl ContactService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// Validate a raw submission and store it. Nothing is written when
	/// validation fails.
	pub async fn submit(&self, body: &Value) -> LeadServiceResult<ContactInquiry> {
		let inquiry = NewContactInquiry::from_json(body)?;
		let stored = self.storage.create_contact_inquiry(inquiry).await?;
		info!(
			"Created contact inquiry {} (type: {})",
			stored.id, stored.inquiry_type
		);
		Ok(stored)
	}

	/// All inquiries, most recent first
	pub async fn list(&self) -> LeadServiceResult<Vec<ContactInquiry>> {
		let inquiries = self.storage.get_all_contact_inquiries().await?;
		debug!("Listing {} contact inquiries", inquiries.len());
		Ok(inquiries)
	}

	pub async fn get(&self, id: &str) -> LeadServiceResult<Option<ContactInquiry>> {
		Ok(self.storage.get_contact_inquiry(id).await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::LeadServiceError;
	use crate::test_support::FailingStore;
	use leads_storage::{ContactInquiryStorage, MemoryStore};
	use serde_json::json;

	fn valid_body() -> Value {
		json!({
			"name": "Jane",
			"email": "jane@example.com",
			"phone": "+254700000000",
			"inquiryType": "maintenance",
			"message": "Inverter beeping at night"
		})
	}

	#[tokio::test]
	async fn test_submit_stores_valid_inquiry() {
		let store = MemoryStore::new();
		let service = ContactService::new(Arc::new(store.clone()));

		let inquiry = service.submit(&valid_body()).await.unwrap();

		assert_eq!(inquiry.inquiry_type, "maintenance");
		assert_eq!(store.count_contact_inquiries().await.unwrap(), 1);
		assert_eq!(service.get(&inquiry.id).await.unwrap(), Some(inquiry));
	}

	#[tokio::test]
	async fn test_invalid_submission_is_not_stored() {
		let store = MemoryStore::new();
		let service = ContactService::new(Arc::new(store.clone()));

		let mut body = valid_body();
		body.as_object_mut().unwrap().remove("email");

		match service.submit(&body).await {
			Err(LeadServiceError::Validation(errors)) => assert!(errors.has_field("email")),
			other => panic!("expected validation error, got {:?}", other),
		}
		assert_eq!(store.count_contact_inquiries().await.unwrap(), 0);
	}

	#[tokio::test]
	async fn test_storage_failure_surfaces_as_storage_error() {
		let service = ContactService::new(Arc::new(FailingStore));

		assert!(matches!(
			service.submit(&valid_body()).await,
			Err(LeadServiceError::Storage(_))
		));
		assert!(matches!(
			service.list().await,
			Err(LeadServiceError::Storage(_))
		));
	}
}
