//! Startup and shutdown logging for the solar leads API

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::settings::{RateLimitSettings, Settings};

/// Lead routes served by every build
pub const LEAD_ENDPOINTS: &[(&str, &str)] = &[
	("GET", "/api/health"),
	("POST", "/api/contact"),
	("GET", "/api/contact"),
	("GET", "/api/contact/{id}"),
	("POST", "/api/quote-request"),
	("GET", "/api/quote-request"),
	("GET", "/api/quote-request/{id}"),
];

/// Logs the effective settings before the listener is bound
pub fn log_service_info(settings: &Settings) {
	info!(
		"=== Solar Leads API v{} ({:?}) ===",
		env!("CARGO_PKG_VERSION"),
		settings.environment.profile
	);
	info!(
		"Request body limit: {} bytes",
		settings.limits.max_body_bytes
	);
	info!(
		"Rate limiting: {}",
		rate_limit_summary(&settings.environment.rate_limiting)
	);
}

/// Human-readable rate limit, as shown in the startup log
pub fn rate_limit_summary(rate: &RateLimitSettings) -> String {
	if rate.enabled {
		format!("{} requests/minute across all clients", rate.requests_per_minute)
	} else {
		"disabled".to_string()
	}
}

/// Logs the listener, the storage backend in use and the lead routes
pub fn log_startup_complete(bind_address: &str, storage_backend: &str) {
	info!(
		"Listening on {} with '{}' storage",
		bind_address, storage_backend
	);
	for (method, path) in LEAD_ENDPOINTS {
		info!("  {:<4} {}", method, path);
	}
}

pub fn log_service_shutdown() {
	info!(
		"Solar Leads API stopped at {}",
		Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rate_limit_summary() {
		let mut rate = RateLimitSettings::default();
		assert_eq!(rate_limit_summary(&rate), "disabled");

		rate.enabled = true;
		rate.requests_per_minute = 30;
		assert_eq!(
			rate_limit_summary(&rate),
			"30 requests/minute across all clients"
		);
	}

	#[test]
	fn test_lead_endpoints_cover_both_lead_kinds() {
		assert!(LEAD_ENDPOINTS.contains(&("POST", "/api/contact")));
		assert!(LEAD_ENDPOINTS.contains(&("POST", "/api/quote-request")));
		assert_eq!(LEAD_ENDPOINTS.len(), 7);
	}
}
