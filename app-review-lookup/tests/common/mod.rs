//! Shared helpers for lookup tests.

#![allow(dead_code)]

use app_review_lookup::{LookupClient, LookupConfig};
use wiremock::MockServer;

pub fn mock_config(server: &MockServer) -> LookupConfig {
    LookupConfig::with_base_url(server.uri())
}

pub fn mock_client(server: &MockServer) -> LookupClient {
    LookupClient::new(mock_config(server)).unwrap()
}

/// Base URL of a server that has already shut down.
pub async fn closed_server_uri() -> String {
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);
    uri
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("app_review_lookup=debug")
        .with_test_writer()
        .try_init();
}
