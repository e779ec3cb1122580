use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Liveness response; independent of storage contents
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthResponse {
	pub success: bool,
	pub message: String,
	#[serde(with = "leads_types::timestamp")]
	#[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
	pub timestamp: DateTime<Utc>,
}

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is running", body = HealthResponse)),
    tag = "health"
))]
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse {
		success: true,
		message: "Server is running".to_string(),
		timestamp: Utc::now(),
	})
}
