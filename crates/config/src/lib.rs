//! Solar Leads Configuration
//!
//! Configuration management and startup utilities for the solar leads API.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	EnvironmentProfile, LogFormat, LoggingSettings, RateLimitSettings, ServerSettings, Settings,
};
pub use startup_logger::{
	log_service_info, log_service_shutdown, log_startup_complete, rate_limit_summary, LEAD_ENDPOINTS,
};
