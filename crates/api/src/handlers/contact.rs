//! Contact inquiry handlers
use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	response::Json,
};
use leads_types::ContactInquiry;
use serde_json::Value;
use tracing::debug;

use crate::handlers::common::{invalid_body, not_found, service_error, ApiResponse, ApiResult};
use crate::state::AppState;

/// Submit a contact inquiry
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/contact",
    request_body = leads_types::NewContactInquiry,
    responses(
        (status = 201, description = "Inquiry stored; returned under `data`", body = ContactInquiry),
        (status = 400, description = "Validation error; details under `errors`", body = [leads_types::FieldError]),
        (status = 500, description = "Internal error")
    ),
    tag = "contact"
))]
/// POST /api/contact - Submit a contact inquiry
pub async fn post_contact(
	State(state): State<AppState>,
	payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ContactInquiry> {
	let Json(body) = payload.map_err(invalid_body)?;

	let inquiry = state
		.contact_service
		.submit(&body)
		.await
		.map_err(|e| service_error("Error creating contact inquiry", e))?;

	Ok((
		StatusCode::CREATED,
		Json(ApiResponse::created(
			"Contact inquiry submitted successfully",
			inquiry,
		)),
	))
}

/// List contact inquiries
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "All inquiries, newest first, under `data`", body = [ContactInquiry]),
        (status = 500, description = "Internal error")
    ),
    tag = "contact"
))]
/// GET /api/contact - List all contact inquiries
pub async fn list_contact_inquiries(
	State(state): State<AppState>,
) -> ApiResult<Vec<ContactInquiry>> {
	let inquiries = state
		.contact_service
		.list()
		.await
		.map_err(|e| service_error("Error fetching contact inquiries", e))?;

	Ok((StatusCode::OK, Json(ApiResponse::data(inquiries))))
}

/// Get a single contact inquiry
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/contact/{id}",
    params(("id" = String, Path, description = "Contact inquiry ID")),
    responses(
        (status = 200, description = "Inquiry under `data`", body = ContactInquiry),
        (status = 404, description = "Inquiry not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "contact"
))]
/// GET /api/contact/{id} - Get a contact inquiry by ID
pub async fn get_contact_inquiry(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> ApiResult<ContactInquiry> {
	debug!("Looking up contact inquiry {}", id);

	match state
		.contact_service
		.get(&id)
		.await
		.map_err(|e| service_error("Error fetching contact inquiry", e))?
	{
		Some(inquiry) => Ok((StatusCode::OK, Json(ApiResponse::data(inquiry)))),
		None => Err(not_found("Contact inquiry not found")),
	}
}
