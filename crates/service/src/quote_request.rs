//! Quote request service
//!
//! Validates quote requests for products and packages and hands them to storage.

use std::sync::Arc;

use leads_storage::Storage;
use leads_types::{NewQuoteRequest, QuoteRequest};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::LeadServiceResult;

#[derive(Clone)]
pub struct QuoteRequestService {
	storage: Arc<dyn Storage>,
}

impl QuoteRequestService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// Validate a raw submission and store it. Nothing is written when
	/// validation fails.
	pub async fn submit(&self, body: &Value) -> LeadServiceResult<QuoteRequest> {
		let request = NewQuoteRequest::from_json(body)?;
		let stored = self.storage.create_quote_request(request).await?;
		info!(
			"Created quote request {} for {} '{}'",
			stored.id, stored.item_type, stored.item_name
		);
		Ok(stored)
	}

	/// All quote requests, most recent first
	pub async fn list(&self) -> LeadServiceResult<Vec<QuoteRequest>> {
		let requests = self.storage.get_all_quote_requests().await?;
		debug!("Listing {} quote requests", requests.len());
		Ok(requests)
	}

	pub async fn get(&self, id: &str) -> LeadServiceResult<Option<QuoteRequest>> {
		Ok(self.storage.get_quote_request(id).await?)
	}
}
