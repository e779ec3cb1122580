//! Test server for integration tests

use std::sync::Arc;

use axum::Router;
use solar_leads::{LeadsBuilder, Settings, Storage};
use tokio::task::JoinHandle;

/// Running server bound to an ephemeral local port
#[allow(dead_code)]
pub struct TestServer {
	pub base_url: String,
	/// Same backend the server writes to, for asserting on stored state
	#[allow(dead_code)]
	pub storage: Arc<dyn Storage>,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a test server backed by a fresh memory store
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, state) = LeadsBuilder::default().start().await?;
		Self::spawn_server_with_app(app, state.storage).await
	}

	/// Spawn a test server with explicit settings over a fresh memory store
	pub async fn spawn_with_settings(
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, state) = LeadsBuilder::new().with_settings(settings).start().await?;
		Self::spawn_server_with_app(app, state.storage).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(
		app: Router,
		storage: Arc<dyn Storage>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self {
			base_url,
			storage,
			handle,
		})
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
