#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use url::Url;

use ghostfolio_rs::GfClient;

/// Bearer token handed out by [`mock_auth`].
pub const BEARER: &str = "test-bearer-token";

/// Static access token used by the test clients.
pub const ACCESS_TOKEN: &str = "test-access-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Mock the anonymous-auth exchange: accepts the static access token as a
/// JSON body and hands out [`BEARER`].
pub fn mock_auth(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/anonymous/")
            .json_body(serde_json::json!({ "accessToken": ACCESS_TOKEN }));
        then.status(201)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "authToken": BEARER }));
    })
}

/// A client pointed at the mock server, otherwise default settings.
pub fn client_for(server: &MockServer) -> GfClient {
    GfClient::builder(ACCESS_TOKEN)
        .host(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// The `authorization` header value every authenticated request must carry.
pub fn bearer_header() -> String {
    format!("Bearer {BEARER}")
}
