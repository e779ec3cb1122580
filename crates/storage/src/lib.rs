//! Solar Leads Storage
//!
//! Storage traits and implementations for captured leads.
//! Ships an in-memory backend; other backends plug in through [`Storage`].

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{
	ContactInquiryStorage, QuoteRequestStorage, Storage, StorageError, StorageResult, StorageStats,
};
