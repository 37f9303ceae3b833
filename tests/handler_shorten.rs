mod common;

use axum::http::StatusCode;
use serde_json::json;
use tinylink::utils::code_generator::CODE_ALPHABET;

#[tokio::test]
async fn test_shorten_url_success() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/");

    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.starts_with("http://localhost:8000/"));

    let code = common::code_from_short_url(short_url);
    assert_eq!(code.len(), common::CODE_LENGTH);
    assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_codes() {
    let (server, _pool) = common::create_test_server().await;

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_url"], second["short_url"]);
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "mylink"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://localhost:8000/mylink");
}

#[tokio::test]
async fn test_shorten_duplicate_custom_code() {
    let (server, _pool) = common::create_test_server().await;

    server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "test123"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://another.com",
            "custom_code": "test123"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");

    let stats = server
        .get("/stats/test123")
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["original_url"], "https://example.com/");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_unsupported_scheme() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({ "custom_code": "abc" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_invalid_custom_code() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "has space"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_shorten_reserved_custom_code() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "shorten"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    server
        .get("/stats/shorten")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shorten_accepted_custom_code_is_reachable() {
    let (server, _pool) = common::create_test_server().await;

    server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "stats"
        }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": "shortener"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/shortener").await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/");

    server
        .delete("/shortener")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_shorten_empty_custom_code_generates_one() {
    let (server, _pool) = common::create_test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({
            "url": "https://example.com",
            "custom_code": ""
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = common::code_from_short_url(json["short_url"].as_str().unwrap());
    assert_eq!(code.len(), common::CODE_LENGTH);
}
