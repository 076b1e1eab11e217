use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use indoc::indoc;
use serde::Deserialize;
use serde_json::{Value, json};
use strict_json::{ResponseBody, Shape, handle_json};

#[derive(Deserialize, Debug)]
#[allow(non_snake_case, reason = "field names are reported to clients as declared")]
struct TestStruct {
    #[serde(rename = "str")]
    Str: String,
}

impl Shape for TestStruct {
    fn declared_name(parent: &str, wire_key: &str) -> Option<&'static str> {
        match (parent, wire_key) {
            ("", "str") => Some("Str"),
            _ => None,
        }
    }
}

/// Posts `body` to a handler answering `OK` once the body decoded.
async fn post_fake(body: &'static str) -> Response<ResponseBody> {
    let request = Request::post("/fake")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap();

    handle_json(request, |s: TestStruct| async move {
        assert_eq!(s.Str, "test string");
        "OK"
    })
    .await
}

async fn read_body(response: Response<ResponseBody>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn assert_rejected(response: Response<ResponseBody>, expected: Value) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers().get(http::header::CONTENT_TYPE).unwrap(), "application/json");

    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn parse_json_request_ok() {
    let response = post_fake(indoc! {r##"
        {
            "str": "test string"
        }"##})
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&read_body(response).await[..], b"OK");
}

#[tokio::test]
async fn parse_json_request_badly_formed() {
    let response = post_fake("test string").await;

    assert_rejected(response, json!({"error": "Request body contains badly-formed JSON (at position 2)"})).await;
}

#[tokio::test]
async fn parse_json_request_badly_formed_eof() {
    let response = post_fake(indoc! {r##"
        {
            "str": "test string"
        "##})
    .await;

    assert_rejected(response, json!({"error": "Request body contains badly-formed JSON"})).await;
}

#[tokio::test]
async fn parse_json_request_unmarshal_error() {
    let response = post_fake("{\n\t\t\t\"str\": 2\n\t\t}").await;

    assert_rejected(
        response,
        json!({"error": "Request body contains an invalid value for the \"Str\" field (at position 13)"}),
    )
    .await;
}

#[tokio::test]
async fn parse_json_request_unknown_field() {
    let response = post_fake(indoc! {r##"
        {
            "str": "test string",
            "other field": "shouldn't be here"
        }"##})
    .await;

    assert_rejected(response, json!({"error": "Request body contains unknown field \"other field\""})).await;
}

#[tokio::test]
async fn parse_json_request_empty_json() {
    let response = post_fake("").await;

    assert_rejected(response, json!({"error": "Request body must not be empty"})).await;
}

#[tokio::test]
async fn parse_json_request_multiple_objects() {
    let response = post_fake(indoc! {r##"
        {
            "str": "test string"
        }
        {
            "str": "test string"
        }"##})
    .await;

    assert_rejected(response, json!({"error": "Request body must only contain a single JSON object"})).await;
}

#[tokio::test]
async fn error_payload_has_a_single_key() {
    let response = post_fake("[").await;
    let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}
