pub mod common;
pub mod contact;
pub mod health;
pub mod quote_requests;

pub use contact::{get_contact_inquiry, list_contact_inquiries, post_contact};
pub use health::health;
pub use quote_requests::{get_quote_request, list_quote_requests, post_quote_request};
