//! Response envelope and error mapping shared by handlers

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use leads_service::LeadServiceError;
use leads_types::{FieldError, ValidationErrors};
use serde::Serialize;
use tracing::{debug, error, warn};

pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `{ success, message?, data?, errors? }` envelope returned by every lead route
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
	pub fn data(data: T) -> Self {
		Self {
			success: true,
			message: None,
			data: Some(data),
			errors: None,
		}
	}

	pub fn created(message: &str, data: T) -> Self {
		Self {
			success: true,
			message: Some(message.to_string()),
			data: Some(data),
			errors: None,
		}
	}
}

impl ApiResponse<()> {
	pub fn failure(message: &str) -> Self {
		Self {
			success: false,
			message: Some(message.to_string()),
			data: None,
			errors: None,
		}
	}

	pub fn validation(errors: Vec<FieldError>) -> Self {
		Self {
			success: false,
			message: Some(VALIDATION_ERROR_MESSAGE.to_string()),
			data: None,
			errors: Some(errors),
		}
	}
}

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub fn validation_error(errors: ValidationErrors) -> ApiError {
	(
		StatusCode::BAD_REQUEST,
		Json(ApiResponse::validation(errors.into_errors())),
	)
}

pub fn internal_error() -> ApiError {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(ApiResponse::failure(INTERNAL_ERROR_MESSAGE)),
	)
}

pub fn not_found(message: &str) -> ApiError {
	(StatusCode::NOT_FOUND, Json(ApiResponse::failure(message)))
}

pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Body could not be read as JSON at all. A body cut off by the size limit
/// gets 413, matching requests refused up front by their `Content-Length`.
pub fn invalid_body(rejection: JsonRejection) -> ApiError {
	if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
		warn!("Rejected oversized request body");
		return (
			StatusCode::PAYLOAD_TOO_LARGE,
			Json(ApiResponse::failure(PAYLOAD_TOO_LARGE_MESSAGE)),
		);
	}

	warn!("Rejected request body: {}", rejection.body_text());
	validation_error(ValidationErrors::single(FieldError::invalid_body(
		rejection.body_text(),
	)))
}

/// Map a service failure to a response; storage faults are logged and hidden
pub fn service_error(context: &str, err: LeadServiceError) -> ApiError {
	match err {
		LeadServiceError::Validation(errors) => {
			debug!("{}: {}", context, errors);
			validation_error(errors)
		},
		LeadServiceError::Storage(msg) => {
			error!("{}: {}", context, msg);
			internal_error()
		},
	}
}
