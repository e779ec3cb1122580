//! In-memory storage implementation using DashMap
//!
//! Records live for the lifetime of the process. Nothing is persisted and
//! nothing is ever updated or removed once inserted.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use leads_types::{ContactInquiry, NewContactInquiry, NewQuoteRequest, QuoteRequest};
use tracing::debug;
use uuid::Uuid;

use crate::traits::{ContactInquiryStorage, QuoteRequestStorage, Storage, StorageResult};

/// Record plus the insertion sequence used to order equal timestamps
#[derive(Debug, Clone)]
struct Sequenced<T> {
	seq: u64,
	record: T,
}

/// In-memory storage for contact inquiries and quote requests
#[derive(Clone, Default)]
pub struct MemoryStore {
	contact_inquiries: Arc<DashMap<String, Sequenced<ContactInquiry>>>,
	quote_requests: Arc<DashMap<String, Sequenced<QuoteRequest>>>,
	sequence: Arc<AtomicU64>,
}

impl MemoryStore {
	/// Create a new, empty memory store
	pub fn new() -> Self {
		Self::default()
	}

	fn next_seq(&self) -> u64 {
		self.sequence.fetch_add(1, Ordering::Relaxed)
	}

	/// Insert a record under a fresh UUID. Collisions are retried so an id is
	/// never reused within a mapping.
	fn insert_new<T, F>(
		&self,
		map: &DashMap<String, Sequenced<T>>,
		created_at: DateTime<Utc>,
		build: F,
	) -> T
	where
		T: Clone,
		F: FnOnce(String, DateTime<Utc>) -> T,
	{
		let seq = self.next_seq();
		loop {
			let id = Uuid::new_v4().to_string();
			if let dashmap::mapref::entry::Entry::Vacant(slot) = map.entry(id.clone()) {
				let record = build(id, created_at);
				slot.insert(Sequenced {
					seq,
					record: record.clone(),
				});
				return record;
			}
		}
	}
}

/// Snapshot the map and order newest first
fn newest_first<T, F>(map: &DashMap<String, Sequenced<T>>, created_at: F) -> Vec<T>
where
	T: Clone,
	F: Fn(&T) -> DateTime<Utc>,
{
	let mut entries: Vec<Sequenced<T>> = map.iter().map(|entry| entry.value().clone()).collect();
	entries.sort_by(|a, b| match created_at(&b.record).cmp(&created_at(&a.record)) {
		CmpOrdering::Equal => b.seq.cmp(&a.seq),
		other => other,
	});
	entries.into_iter().map(|entry| entry.record).collect()
}

#[async_trait]
impl ContactInquiryStorage for MemoryStore {
	async fn create_contact_inquiry(
		&self,
		inquiry: NewContactInquiry,
	) -> StorageResult<ContactInquiry> {
		let record = self.insert_new(&self.contact_inquiries, Utc::now(), |id, created_at| {
			ContactInquiry::new(id, inquiry, created_at)
		});
		debug!("Stored contact inquiry {}", record.id);
		Ok(record)
	}

	async fn get_all_contact_inquiries(&self) -> StorageResult<Vec<ContactInquiry>> {
		Ok(newest_first(&self.contact_inquiries, |i| i.created_at))
	}

	async fn get_contact_inquiry(&self, id: &str) -> StorageResult<Option<ContactInquiry>> {
		Ok(self
			.contact_inquiries
			.get(id)
			.map(|entry| entry.record.clone()))
	}

	async fn count_contact_inquiries(&self) -> StorageResult<usize> {
		Ok(self.contact_inquiries.len())
	}
}

#[async_trait]
impl QuoteRequestStorage for MemoryStore {
	async fn create_quote_request(&self, request: NewQuoteRequest) -> StorageResult<QuoteRequest> {
		let record = self.insert_new(&self.quote_requests, Utc::now(), |id, created_at| {
			QuoteRequest::new(id, request, created_at)
		});
		debug!(
			"Stored quote request {} for {} {}",
			record.id, record.item_type, record.item_id
		);
		Ok(record)
	}

	async fn get_all_quote_requests(&self) -> StorageResult<Vec<QuoteRequest>> {
		Ok(newest_first(&self.quote_requests, |r| r.created_at))
	}

	async fn get_quote_request(&self, id: &str) -> StorageResult<Option<QuoteRequest>> {
		Ok(self.quote_requests.get(id).map(|entry| entry.record.clone()))
	}

	async fn count_quote_requests(&self) -> StorageResult<usize> {
		Ok(self.quote_requests.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check if the maps are accessible
		Ok(true)
	}

	fn backend_name(&self) -> &'static str {
		"memory"
	}
}
