//! Mock Ragios server shared by the client tests.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::shared::config::ClientConfig;

pub(crate) const ADMIN: &str = "admin";
pub(crate) const PASSWORD: &str = "ragios";
pub(crate) const TOKEN: &str = "session-token-123";
pub(crate) const UNAUTHORIZED: &str = "You are not authorized to access this resource";

/// Start a server whose `/session` endpoint accepts `ADMIN`/`PASSWORD` and
/// rejects anything else.
pub(crate) async fn start_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_string_contains(format!("username={}", ADMIN)))
        .and(body_string_contains(format!("password={}", PASSWORD)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "RagiosAuthSession": TOKEN })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": UNAUTHORIZED })))
        .with_priority(2)
        .mount(&server)
        .await;

    server
}

/// Configuration pointing at `server`, logged in as the admin.
pub(crate) fn config_for(server: &MockServer) -> ClientConfig {
    let uri = server.uri();
    let (address, port) = uri
        .rsplit_once(':')
        .expect("mock server uri has a port");
    ClientConfig::new()
        .with_address(address)
        .with_port(port)
        .with_credentials(ADMIN, PASSWORD)
}

/// Run blocking client code off the async test runtime.
///
/// The blocking client owns its own runtime, so it must be built, used and
/// dropped inside the closure.
pub(crate) async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking client task panicked")
}

/// `{"error": message}` response with the given status.
pub(crate) fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}
