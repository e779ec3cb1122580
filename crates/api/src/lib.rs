//! Solar Leads API
//!
//! Axum-based routes and middleware for the solar leads API.

pub mod handlers;
pub mod rate_limit;
pub mod router;
pub mod security;
pub mod state;

pub use rate_limit::with_rate_limit;
pub use router::{create_router, create_router_with_body_limit, DEFAULT_BODY_LIMIT_BYTES};
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
