//! Centralized mocks and fixtures for testing
//!
//! Shared servers, request bodies and storage doubles used across test files.

pub mod api_fixtures;
pub mod failing_store;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use api_fixtures::ApiFixtures;
#[allow(unused_imports)]
pub use failing_store::FailingStore;
#[allow(unused_imports)]
pub use test_server::TestServer;
