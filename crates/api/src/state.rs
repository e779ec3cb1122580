use std::sync::Arc;

use leads_service::{ContactService, QuoteRequestService};
use leads_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub contact_service: Arc<ContactService>,
	pub quote_request_service: Arc<QuoteRequestService>,
	pub storage: Arc<dyn Storage>,
}

impl AppState {
	/// Wire the services around a single shared storage backend
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self {
			contact_service: Arc::new(ContactService::new(Arc::clone(&storage))),
			quote_request_service: Arc::new(QuoteRequestService::new(Arc::clone(&storage))),
			storage,
		}
	}
}
