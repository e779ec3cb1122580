//! # OpenAPI Specification Generator
//!
//! Writes the OpenAPI document for the lead routes without starting a server.
//!
//! ```bash
//! # Generate to default location (docs/api/openapi.json)
//! cargo run -p leads-api --bin generate_openapi --features openapi
//!
//! # Generate to custom location
//! cargo run -p leads-api --bin generate_openapi --features openapi -- custom/path/openapi.json
//! ```

use std::env;
use std::fs;
use std::path::Path;

use leads_api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let output_path = env::args()
		.nth(1)
		.unwrap_or_else(|| "docs/api/openapi.json".to_string());

	if let Some(parent) = Path::new(&output_path).parent() {
		if !parent.as_os_str().is_empty() && !parent.exists() {
			fs::create_dir_all(parent)?;
		}
	}

	println!("🚀 Generating OpenAPI specification to {}", output_path);

	let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
	fs::write(&output_path, json)?;

	println!("✅ OpenAPI specification successfully generated!");
	Ok(())
}
