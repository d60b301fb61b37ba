//! GIPHY adapter against a local mock server.
use fitbeat_bot::error::LookupError;
use fitbeat_bot::services::{GifLookup, GiphyClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GiphyClient {
    GiphyClient::new(reqwest::Client::new(), "test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn returns_the_original_image_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/random"))
        .and(query_param("tag", "fitness"))
        .and(query_param("rating", "g"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "images": { "original": { "url": "https://media.giphy.test/abc.gif" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server).random_gif().await.unwrap();
    assert_eq!(url, "https://media.giphy.test/abc.gif");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server).random_gif().await.unwrap_err();
    assert!(matches!(err, LookupError::Status(s) if s.as_u16() == 429));
}

#[tokio::test]
async fn unexpected_body_shape_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let err = client(&server).random_gif().await.unwrap_err();
    assert!(matches!(err, LookupError::Http(_)));
}

#[tokio::test]
async fn empty_url_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "images": { "original": { "url": "" } } }
        })))
        .mount(&server)
        .await;

    let err = client(&server).random_gif().await.unwrap_err();
    assert!(matches!(err, LookupError::Malformed(_)));
}
