//! Integration tests for reqwest-backed signals using wiremock.

use futures::{StreamExt, stream};
use reqwest::Client;
use serde_json::json;
use sigmap::{MappingErrorKind, Payload, ResponseStreamExt};
use sigmap_reqwest::{Error, ResponseExt, responses, signal};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base URI of a local port nothing listens on.
fn unreachable_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_successful_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "ferris"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let values: Vec<_> = signal(client.get(format!("{}/user", mock_server.uri())))
        .filter_successful_status_codes()
        .map_json()
        .collect()
        .await;

    assert_eq!(values.len(), 1);
    assert_eq!(values[0].as_ref().unwrap(), &json!({"name": "ferris"}));
}

#[tokio::test]
async fn test_error_status_fails_with_response_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such thing"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let results: Vec<_> = signal(client.get(format!("{}/missing", mock_server.uri())))
        .filter_successful_status_codes()
        .map_string()
        .collect()
        .await;

    let error = results[0].as_ref().unwrap_err();
    let mapping = error.as_mapping().expect("mapping failure");
    assert_eq!(mapping.kind(), MappingErrorKind::StatusCode);

    let response = mapping.response().expect("rejected response");
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.body().as_ref(), b"no such thing");
}

#[tokio::test]
async fn test_headers_are_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/headers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("body")
                .insert_header("X-Custom-Header", "custom-value"),
        )
        .mount(&mock_server)
        .await;

    let response = Client::new()
        .get(format!("{}/headers", mock_server.uri()))
        .send()
        .await
        .unwrap()
        .into_mappable()
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.headers()["x-custom-header"], "custom-value");
    assert_eq!(response.body().as_ref(), b"body");
}

#[tokio::test]
async fn test_transport_failure_is_forwarded() {
    let uri = unreachable_uri();

    let results: Vec<_> = signal(Client::new().get(format!("{uri}/gone")))
        .filter_successful_status_codes()
        .map_json()
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_responses_forward_upstream_transport_failure() {
    let client = Client::new();
    let upstream = stream::iter([format!("{}/gone", unreachable_uri())])
        .then(|url| client.get(url).send());

    let results: Vec<_> = responses(upstream)
        .filter_successful_status_codes()
        .map_json()
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_responses_keep_order_and_stop_at_first_failure() {
    let mock_server = MockServer::start().await;

    let routes = [("/a", 200_u16, "first"), ("/b", 500, "broken"), ("/c", 200, "third")];
    for (route, status, body) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;
    }

    let client = Client::new();
    let urls = ["/a", "/b", "/c"].map(|route| format!("{}{route}", mock_server.uri()));
    let upstream = stream::iter(urls).then(|url| client.get(url).send());

    let results: Vec<_> = responses(upstream)
        .filter_successful_status_codes()
        .map_string()
        .collect()
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap(), "first");
    let error = results[1].as_ref().unwrap_err();
    assert_eq!(
        error.as_mapping().map(|error| error.kind()),
        Some(MappingErrorKind::StatusCode)
    );
    assert!(matches!(
        error.as_mapping().map(|error| error.context()),
        Some(Payload::Response(_))
    ));
}
