//! Test helpers for endpoint integration tests.
//!
//! Each test gets its own mock server and a client pointed at it.

use popcat_core::PopcatClient;

use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key-12345";
pub const TEST_IMAGE: &str = "https://cdn.example.com/avatar.png";

/// Start a mock server and a client whose base URL is the server's.
pub async fn client_with_server() -> (PopcatClient, MockServer) {
    let server = MockServer::start().await;
    let client = PopcatClient::new(&server.uri()).expect("mock server URI should parse");
    (client, server)
}
