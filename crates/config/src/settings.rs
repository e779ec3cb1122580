//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Default request body ceiling (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
	pub limits: LimitSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 5000,
		}
	}
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub rate_limiting: RateLimitSettings,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	#[default]
	Development,
	Staging,
	Production,
}

/// Global rate limiting applied in front of the router
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
}

impl Default for RateLimitSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			requests_per_minute: 100,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	#[default]
	Pretty,
	Compact,
}

/// Request limits
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LimitSettings {
	pub max_body_bytes: usize,
}

impl Default for LimitSettings {
	fn default() -> Self {
		Self {
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Reject values that deserialize fine but cannot be served
	pub fn validate(&self) -> Result<(), String> {
		if self.server.host.trim().is_empty() {
			return Err("server.host must not be empty".to_string());
		}
		if self.limits.max_body_bytes == 0 {
			return Err("limits.max_body_bytes must be greater than zero".to_string());
		}
		let rate = &self.environment.rate_limiting;
		if rate.enabled && rate.requests_per_minute == 0 {
			return Err(
				"environment.rate_limiting.requests_per_minute must be greater than zero".to_string(),
			);
		}
		Ok(())
	}
}
