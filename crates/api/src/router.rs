use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	get_contact_inquiry, get_quote_request, health, list_contact_inquiries, list_quote_requests,
	post_contact, post_quote_request,
};
use crate::security::add_security_headers;
use crate::state::AppState;
// State is applied at the application level using `.with_state(...)`.
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Request body ceiling used by [`create_router`]
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn create_router() -> Router<AppState> {
	create_router_with_body_limit(DEFAULT_BODY_LIMIT_BYTES)
}

pub fn create_router_with_body_limit(max_body_bytes: usize) -> Router<AppState> {
	// Layers prepared first so they're in scope for all cfg paths
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(max_body_bytes);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Base router
	let base_router = Router::new()
		.route("/api/health", get(health))
		.route("/api/health/", get(health))
		.route(
			"/api/contact",
			get(list_contact_inquiries).post(post_contact),
		)
		.route(
			"/api/contact/",
			get(list_contact_inquiries).post(post_contact),
		)
		.route("/api/contact/{id}", get(get_contact_inquiry))
		.route("/api/contact/{id}/", get(get_contact_inquiry))
		.route(
			"/api/quote-request",
			get(list_quote_requests).post(post_quote_request),
		)
		.route(
			"/api/quote-request/",
			get(list_quote_requests).post(post_quote_request),
		)
		.route("/api/quote-request/{id}", get(get_quote_request))
		.route("/api/quote-request/{id}/", get(get_quote_request));

	// Conditionally add OpenAPI endpoints
	#[cfg(feature = "openapi")]
	let router = {
		// SwaggerUI automatically provides the OpenAPI JSON endpoint
		base_router
			.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
	};

	#[cfg(not(feature = "openapi"))]
	let router = base_router;

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}
