//! Solar Leads Library
//!
//! Lead capture API for a solar equipment retailer: contact inquiries and
//! product/package quote requests, stored behind a pluggable storage backend.

// Core domain types
pub use leads_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	ContactInquiry,
	FieldError,
	ItemType,
	NewContactInquiry,
	NewQuoteRequest,
	QuoteRequest,
	ValidationErrors,
};

// Service layer
pub use leads_service::{ContactService, LeadServiceError, QuoteRequestService};

// Storage layer
pub use leads_storage::{
	ContactInquiryStorage, MemoryStore, QuoteRequestStorage, Storage, StorageError,
	StorageResult, StorageStats,
};

// API layer
pub use leads_api::{create_router, create_router_with_body_limit, with_rate_limit, AppState};

// Config
pub use leads_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod models {
	pub use leads_types::*;
}

pub mod storage {
	pub use leads_storage::*;
}

pub mod config {
	pub use leads_config::*;
}

pub mod api {
	pub use leads_api::*;
}

pub mod service {
	pub use leads_service::*;
}

use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Builder pattern for configuring the leads server
pub struct LeadsBuilder<S = MemoryStore>
where
	S: Storage + 'static,
{
	settings: Option<Settings>,
	storage: S,
}

impl<S> LeadsBuilder<S>
where
	S: Storage + 'static,
{
	/// Create a new builder around the provided storage backend
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
		}
	}
}

// Default constructor using MemoryStore for convenience
impl Default for LeadsBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl LeadsBuilder<MemoryStore> {
	/// Create a new builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}

	/// Create a builder from configuration using default memory storage
	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}
}

impl<S> LeadsBuilder<S>
where
	S: Storage + 'static,
{
	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		use leads_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e.to_string())?;
				} else {
					subscriber.try_init().map_err(|e| e.to_string())?;
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e.to_string())?;
				} else {
					subscriber.try_init().map_err(|e| e.to_string())?;
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e.to_string())?;
				} else {
					subscriber.try_init().map_err(|e| e.to_string())?;
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the application state and router without binding a socket.
	/// Rate limiting from the settings is already applied to the returned router.
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let healthy = self
			.storage
			.health_check()
			.await
			.map_err(|e| format!("Storage health check failed: {}", e))?;
		if !healthy {
			return Err(format!(
				"Storage backend '{}' reported unhealthy",
				self.storage.backend_name()
			)
			.into());
		}

		let stats = self
			.storage
			.stats()
			.await
			.map_err(|e| format!("Failed to read storage stats: {}", e))?;
		info!(
			"Storage backend '{}' ready ({} contact inquiries, {} quote requests)",
			self.storage.backend_name(),
			stats.total_contact_inquiries,
			stats.total_quote_requests
		);

		let storage: Arc<dyn Storage> = Arc::new(self.storage);
		let app_state = AppState::new(storage);

		let mut router =
			create_router_with_body_limit(settings.limits.max_body_bytes).with_state(app_state.clone());

		let rate = &settings.environment.rate_limiting;
		if rate.enabled {
			let requests = NonZeroU64::new(u64::from(rate.requests_per_minute))
				.ok_or("rate_limiting.requests_per_minute must be greater than zero")?;
			router = with_rate_limit(router, requests, Duration::from_secs(60));
		}

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application until Ctrl-C
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let (settings, config_error) = match self.settings.take() {
			Some(settings) => (settings, None),
			None => match load_config() {
				Ok(settings) => (settings, None),
				Err(e) => (Settings::default(), Some(e)),
			},
		};

		Self::init_tracing_from_settings(&settings)?;

		log_service_info(&settings);

		if let Some(e) = config_error {
			warn!("Falling back to default configuration: {}", e);
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);

		let (app, state) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr, state.storage.backend_name());
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		leads_config::log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
