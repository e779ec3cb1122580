//! Configuration loading utilities

use crate::Settings;
use config::{Config, Environment, File};
use thiserror::Error;

/// Default config file, relative to the working directory (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix for environment overrides, e.g. `LEADS__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "LEADS";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("failed to load configuration: {0}")]
	Config(#[from] config::ConfigError),
	#[error("invalid configuration: {0}")]
	Invalid(String),
}

/// Load configuration from the default config file and `LEADS__*` variables
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_PATH)
}

/// Load configuration from `path` (optional file) layered under environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate().map_err(ConfigLoadError::Invalid)?;
	Ok(settings)
}
