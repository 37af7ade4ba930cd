//! Mock initializer endpoints for generator testing
//!
//! Wraps wiremock setup with the request shape the generator must produce:
//! `GET /starter.zip?type=<buildSystem>&name=<name>` with the plugin's
//! `User-Agent` header.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use girder_spring_boot::BuildSystem;

/// The exact `User-Agent` value the generator must send
pub fn expected_user_agent() -> String {
    format!("girder-spring-boot/{}", env!("CARGO_PKG_VERSION"))
}

/// Mount a starter endpoint that returns `body` and requires exactly one
/// correctly-shaped request (URL query and `User-Agent` both matched)
pub async fn mock_starter_download(
    server: &MockServer,
    build_system: BuildSystem,
    name: &str,
    body: Vec<u8>,
) {
    Mock::given(method("GET"))
        .and(path("/starter.zip"))
        .and(query_param("type", build_system.id()))
        .and(query_param("name", name))
        .and(header("user-agent", expected_user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a starter endpoint that always fails with the given status
pub async fn mock_failing_starter(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/starter.zip"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
