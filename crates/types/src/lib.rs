//! Solar Leads Types
//!
//! Shared models for the solar leads API.
//! Contains the two lead kinds, their insert forms and the field validation
//! applied to inbound submissions.

pub mod contact;
pub mod quote_request;
pub mod timestamp;
pub mod validation;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use contact::{ContactInquiry, NewContactInquiry};
pub use quote_request::{ItemType, NewQuoteRequest, QuoteRequest};
pub use validation::{FieldError, FieldErrorCode, FieldReader, ValidationErrors, ValidationResult};
