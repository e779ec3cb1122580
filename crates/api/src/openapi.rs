use utoipa::OpenApi;

use crate::handlers::health::HealthResponse;
use crate::handlers::{contact, health, quote_requests};
use leads_types::{
	ContactInquiry, FieldError, FieldErrorCode, ItemType, NewContactInquiry, NewQuoteRequest,
	QuoteRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        contact::post_contact,
        contact::list_contact_inquiries,
        contact::get_contact_inquiry,
        quote_requests::post_quote_request,
        quote_requests::list_quote_requests,
        quote_requests::get_quote_request,
    ),
    components(schemas(
        HealthResponse,
        ContactInquiry, NewContactInquiry,
        QuoteRequest, NewQuoteRequest, ItemType,
        FieldError, FieldErrorCode
    )),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "quote-request", description = "Product and package quote requests"),
        (name = "health", description = "Liveness endpoint")
    )
)]
pub struct ApiDoc;
