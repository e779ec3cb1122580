//! Global request rate limiting
//!
//! One limiter sits in front of the whole router, so every request counts
//! against the same budget regardless of connection or route.

use std::num::NonZeroU64;
use std::time::Duration;

use axum::{
	error_handling::HandleErrorLayer, extract::Request, http::StatusCode, response::Json,
	BoxError, Router,
};
use tower::{
	buffer::BufferLayer,
	limit::RateLimitLayer,
	load_shed::{error::Overloaded, LoadShedLayer},
	ServiceBuilder,
};
use tracing::{error, warn};

use crate::handlers::common::{internal_error, ApiError, ApiResponse};

/// Requests that may wait for the limiter worker at once
pub const RATE_LIMIT_QUEUE: usize = 1024;

pub const RATE_LIMITED_MESSAGE: &str = "Too many requests";

/// Wrap `router` so that at most `requests` are served per `per`.
/// Requests over the budget are answered with 429 instead of queueing.
pub fn with_rate_limit(router: Router, requests: NonZeroU64, per: Duration) -> Router {
	let limited = ServiceBuilder::new()
		.layer(HandleErrorLayer::new(handle_rate_limit_error))
		.layer(BufferLayer::<Request>::new(RATE_LIMIT_QUEUE))
		.layer(LoadShedLayer::new())
		.layer(RateLimitLayer::new(requests.get(), per))
		.service(router);

	// Clones of the buffered service share one limiter
	Router::new().fallback_service(limited)
}

async fn handle_rate_limit_error(err: BoxError) -> ApiError {
	if err.is::<Overloaded>() {
		warn!("Request rejected: rate limit exceeded");
		(
			StatusCode::TOO_MANY_REQUESTS,
			Json(ApiResponse::failure(RATE_LIMITED_MESSAGE)),
		)
	} else {
		error!("Rate limiter failed: {}", err);
		internal_error()
	}
}
