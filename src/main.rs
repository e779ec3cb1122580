//! Solar Leads Server
//!
//! Main entry point for the lead capture API

use solar_leads::LeadsBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	LeadsBuilder::new().start_server().await
}
