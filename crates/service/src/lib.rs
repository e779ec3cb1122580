//! Solar Leads Service
//!
//! Validation and storage orchestration for contact inquiries and quote requests.

pub mod contact;
pub mod errors;
pub mod quote_request;

#[cfg(test)]
mod test_support;

pub use contact::ContactService;
pub use errors::{LeadServiceError, LeadServiceResult};
pub use quote_request::QuoteRequestService;
