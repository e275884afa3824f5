//! Coverage for the locality API adapter: URL construction, status mapping,
//! and full request/response cycles against a mock upstream.

use super::*;
use httpmock::prelude::*;
use rstest::rstest;
use serde_json::json;

const SEARCH_PATH: &str = "/postcode/search.json";
const TOKEN: &str = "test-token";

fn endpoint() -> Url {
    Url::parse("https://api.example.test/postcode/search.json").expect("valid URL")
}

fn source_for(server: &MockServer) -> LocalityApiHttpSource {
    let endpoint = Url::parse(&server.url(SEARCH_PATH)).expect("mock server URL");
    LocalityApiHttpSource::new(LocalityApiConfig {
        endpoint,
        bearer_token: Zeroizing::new(TOKEN.to_owned()),
    })
    .expect("client should build")
}

#[rstest]
#[case::both(LocalitySearch::new("2000", "NSW"), Some("q=2000&state=NSW"))]
#[case::query_only(LocalitySearch::new("North Sydney", ""), Some("q=North+Sydney"))]
#[case::state_only(LocalitySearch::new("", "VIC"), Some("state=VIC"))]
#[case::neither(LocalitySearch::new("", ""), None)]
fn omits_empty_query_parameters(#[case] search: LocalitySearch, #[case] expected: Option<&str>) {
    let url = build_search_url(&endpoint(), &search);
    assert_eq!(url.query(), expected);
    assert_eq!(url.path(), SEARCH_PATH);
}

#[rstest]
#[case::unauthorised(StatusCode::UNAUTHORIZED, "Unauthorized")]
#[case::forbidden(StatusCode::FORBIDDEN, "Unauthorized")]
#[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
#[case::bad_request(StatusCode::BAD_REQUEST, "Status")]
#[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Status")]
fn maps_http_statuses_to_port_errors(#[case] status: StatusCode, #[case] expected: &str) {
    let error = map_status_error(status, b"{\"error\": {\"errorMessage\": \"nope\"}}");
    let matched = match expected {
        "Unauthorized" => matches!(error, LocalitySourceError::Unauthorized { .. }),
        "Timeout" => matches!(error, LocalitySourceError::Timeout { .. }),
        "Status" => matches!(error, LocalitySourceError::Status { .. }),
        _ => panic!("unsupported test expectation: {expected}"),
    };
    assert!(matched, "{status} should map to {expected}, got {error:?}");
}

#[test]
fn status_messages_include_a_compact_body_preview() {
    let error = map_status_error(StatusCode::BAD_GATEWAY, b"upstream\n   unavailable");
    assert_eq!(
        error.to_string(),
        "locality service returned an error: status 502: upstream unavailable"
    );
}

#[test]
fn long_bodies_are_truncated_in_previews() {
    let body = "x".repeat(400);
    let preview = body_preview(body.as_bytes());
    assert_eq!(preview.chars().count(), 163);
    assert!(preview.ends_with("..."));
}

#[tokio::test]
async fn sends_bearer_token_and_search_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("q", "2000")
                .query_param("state", "NSW")
                .header("Authorization", "Bearer test-token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "localities": {
                        "locality": {
                            "category": "Delivery Area",
                            "id": 123,
                            "latitude": -33.865143,
                            "location": "SYDNEY",
                            "longitude": 151.2099,
                            "postcode": 2000,
                            "state": "NSW"
                        }
                    }
                }));
        })
        .await;

    let localities = source_for(&server)
        .fetch_localities(&LocalitySearch::new("2000", "NSW"))
        .await
        .expect("lookup succeeds");

    mock.assert_async().await;
    assert_eq!(localities.len(), 1);
    assert_eq!(localities[0].location(), "SYDNEY");
    assert_eq!(localities[0].postcode(), 2000);
}

#[tokio::test]
async fn blank_state_is_not_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("q", "Sydney")
                .query_param_missing("state");
            then.status(200).json_body(json!({ "localities": "" }));
        })
        .await;

    let localities = source_for(&server)
        .fetch_localities(&LocalitySearch::new("Sydney", ""))
        .await
        .expect("lookup succeeds");

    mock.assert_async().await;
    assert!(localities.is_empty());
}

#[tokio::test]
async fn rejected_credentials_map_to_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SEARCH_PATH);
            then.status(401)
                .json_body(json!({ "error": { "errorMessage": "Invalid API key" } }));
        })
        .await;

    let error = source_for(&server)
        .fetch_localities(&LocalitySearch::new("2000", "NSW"))
        .await
        .expect_err("401 should fail");

    assert!(matches!(error, LocalitySourceError::Unauthorized { .. }));
    assert!(error.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn malformed_payloads_map_to_decode_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(SEARCH_PATH);
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let error = source_for(&server)
        .fetch_localities(&LocalitySearch::new("2000", "NSW"))
        .await
        .expect_err("HTML should not decode");

    assert!(matches!(error, LocalitySourceError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_upstream_maps_to_transport_error() {
    let source = LocalityApiHttpSource::new(LocalityApiConfig {
        endpoint: Url::parse("http://127.0.0.1:9/postcode/search.json").expect("valid URL"),
        bearer_token: Zeroizing::new(TOKEN.to_owned()),
    })
    .expect("client should build");

    let error = source
        .fetch_localities(&LocalitySearch::new("2000", "NSW"))
        .await
        .expect_err("nothing listens on the discard port");

    assert!(matches!(error, LocalitySourceError::Transport { .. }));
}
