//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use bizfind_core::SearchCriteria;
use bizfind_places::types::DETAIL_FIELDS;
use bizfind_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url(30, "bizfind-test", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn text_search_returns_place_ids_in_order() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            { "place_id": "ChIJ-a", "name": "A", "rating": 4.1 },
            { "place_id": "ChIJ-b", "name": "B" },
            { "place_id": "ChIJ-c" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "bakery in Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let hits = test_client(&server.uri())
        .text_search(&SearchCriteria::new("bakery", "Paris", "test-key"))
        .await
        .expect("should parse text search");

    let ids: Vec<&str> = hits.iter().map(|h| h.place_id.as_str()).collect();
    assert_eq!(ids, ["ChIJ-a", "ChIJ-b", "ChIJ-c"]);
    assert_eq!(hits[0].name.as_deref(), Some("A"));
}

#[tokio::test]
async fn text_search_skips_hits_without_place_id() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            { "name": "no id" },
            { "place_id": "ChIJ-b" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let hits = test_client(&server.uri())
        .text_search(&SearchCriteria::new("bakery", "Paris", "test-key"))
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].place_id, "ChIJ-b");
}

#[tokio::test]
async fn text_search_request_denied_is_api_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid.",
        "results": []
    });
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .text_search(&SearchCriteria::new("bakery", "Paris", "bad-key"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, PlacesError::Api { ref status, .. } if status == "REQUEST_DENIED"),
        "{err:?}"
    );
    assert!(err.to_string().contains("The provided API key is invalid."));
}

#[tokio::test]
async fn text_search_missing_results_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .text_search(&SearchCriteria::new("bakery", "Paris", "test-key"))
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::MalformedResponse { .. }), "{err:?}");
    assert!(err.is_remote());
}

#[tokio::test]
async fn text_search_non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .text_search(&SearchCriteria::new("bakery", "Paris", "test-key"))
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "{err:?}");
}

#[tokio::test]
async fn place_details_requests_exact_field_set() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Du Pain et des Idées",
            "formatted_address": "34 Rue Yves Toudic, 75010 Paris",
            "rating": 4.6,
            "user_ratings_total": 5400,
            "types": ["bakery", "food", "store"],
            "price_level": 1
        }
    });
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "ChIJ-a"))
        .and(query_param("key", "test-key"))
        .and(query_param("fields", DETAIL_FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let detail = test_client(&server.uri())
        .place_details("test-key", "ChIJ-a")
        .await
        .expect("should parse detail");
    assert_eq!(detail.name.as_deref(), Some("Du Pain et des Idées"));
    assert_eq!(detail.rating, Some(4.6));
    assert_eq!(detail.price_level, Some(1));
    assert!(detail.website.is_none());
}

#[tokio::test]
async fn place_details_missing_result_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .place_details("test-key", "ChIJ-a")
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::MalformedResponse { .. }), "{err:?}");
}

#[tokio::test]
async fn place_details_not_found_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .place_details("test-key", "ChIJ-gone")
        .await
        .unwrap_err();
    assert!(
        matches!(err, PlacesError::Api { ref status, .. } if status == "NOT_FOUND"),
        "{err:?}"
    );
}

#[tokio::test]
async fn transport_error_does_not_leak_the_key() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .place_details("super-secret-key", "ChIJ-a")
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::Http(_)), "{err:?}");
    let rendered = format!("{err} {err:?}");
    assert!(
        !rendered.contains("super-secret-key"),
        "key leaked into error: {rendered}"
    );
}
