//! Quote request handlers
use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	response::Json,
};
use leads_types::QuoteRequest;
use serde_json::Value;
use tracing::debug;

use crate::handlers::common::{invalid_body, not_found, service_error, ApiResponse, ApiResult};
use crate::state::AppState;

/// Submit a quote request
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/quote-request",
    request_body = leads_types::NewQuoteRequest,
    responses(
        (status = 201, description = "Quote request stored; returned under `data`", body = QuoteRequest),
        (status = 400, description = "Validation error; details under `errors`", body = [leads_types::FieldError]),
        (status = 500, description = "Internal error")
    ),
    tag = "quote-request"
))]
/// POST /api/quote-request - Submit a quote request
pub async fn post_quote_request(
	State(state): State<AppState>,
	payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<QuoteRequest> {
	let Json(body) = payload.map_err(invalid_body)?;

	let request = state
		.quote_request_service
		.submit(&body)
		.await
		.map_err(|e| service_error("Error creating quote request", e))?;

	Ok((
		StatusCode::CREATED,
		Json(ApiResponse::created(
			"Quote request submitted successfully",
			request,
		)),
	))
}

/// List quote requests
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/quote-request",
    responses(
        (status = 200, description = "All quote requests, newest first, under `data`", body = [QuoteRequest]),
        (status = 500, description = "Internal error")
    ),
    tag = "quote-request"
))]
/// GET /api/quote-request - List all quote requests
pub async fn list_quote_requests(State(state): State<AppState>) -> ApiResult<Vec<QuoteRequest>> {
	let requests = state
		.quote_request_service
		.list()
		.await
		.map_err(|e| service_error("Error fetching quote requests", e))?;

	Ok((StatusCode::OK, Json(ApiResponse::data(requests))))
}

/// Get a single quote request
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/quote-request/{id}",
    params(("id" = String, Path, description = "Quote request ID")),
    responses(
        (status = 200, description = "Quote request under `data`", body = QuoteRequest),
        (status = 404, description = "Quote request not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "quote-request"
))]
/// GET /api/quote-request/{id} - Get a quote request by ID
pub async fn get_quote_request(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> ApiResult<QuoteRequest> {
	debug!("Looking up quote request {}", id);

	match state
		.quote_request_service
		.get(&id)
		.await
		.map_err(|e| service_error("Error fetching quote request", e))?
	{
		Some(request) => Ok((StatusCode::OK, Json(ApiResponse::data(request)))),
		None => Err(not_found("Quote request not found")),
	}
}
