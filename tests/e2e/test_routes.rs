use crate::helpers::build_test_app;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn it_should_convert_text_and_expose_the_asset() {
    let (app, _pipeline) = build_test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/conversions",
            json!({"text": "Hello world", "voice": "Joanna"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "audio/mpeg");
    assert_eq!(response.headers()["x-chunk-count"], "1");
    assert_eq!(response.headers()["x-summarized"], "false");
    assert_eq!(response.headers()["x-history-saved"], "true");
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_bytes(response).await, b"Hello world".to_vec());

    // the conversion loaded the asset for playback
    let response = app
        .clone()
        .oneshot(get("/api/playback"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let playback = body_json(response).await;
    assert_eq!(playback["asset_loaded"], true);
    assert_eq!(playback["content_type"], "audio/mpeg");
    assert_eq!(playback["rate"], 1.0);

    // and the asset itself is served
    let response = app
        .clone()
        .oneshot(get("/api/playback/asset"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello world".to_vec());

    // the pipeline settled in its terminal state
    let response = app
        .clone()
        .oneshot(get("/api/conversions/state"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["phase"], "ready");
}

#[tokio::test]
async fn it_should_reject_empty_text_with_bad_request() {
    let (app, _pipeline) = build_test_app().await;

    let response = app
        .oneshot(post_json("/api/conversions", json!({"text": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert!(error["message"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn it_should_list_and_remove_history_entries() {
    let (app, _pipeline) = build_test_app().await;

    for text in ["first", "second"] {
        let response = app
            .clone()
            .oneshot(post_json("/api/conversions", json!({"text": text})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/api/history")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    assert_eq!(entries, json!([
        {"position": 0, "text": "first"},
        {"position": 1, "text": "second"}
    ]));

    let response = app.clone().oneshot(delete("/api/history/0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // positions shift down after a removal
    let response = app.clone().oneshot(get("/api/history")).await.unwrap();
    let entries = body_json(response).await;
    assert_eq!(entries, json!([{"position": 0, "text": "second"}]));
}

#[tokio::test]
async fn it_should_return_not_found_for_an_out_of_range_removal() {
    let (app, _pipeline) = build_test_app().await;

    let response = app.oneshot(delete("/api/history/5")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_validate_the_playback_rate() {
    let (app, _pipeline) = build_test_app().await;

    // out-of-range rate is rejected even before any asset exists
    let response = app
        .clone()
        .oneshot(put_json("/api/playback/rate", json!({"rate": 3.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // a valid rate without a loaded asset is a conflict
    let response = app
        .clone()
        .oneshot(put_json("/api/playback/rate", json!({"rate": 1.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // after a conversion the rate can be set
    let response = app
        .clone()
        .oneshot(post_json("/api/conversions", json!({"text": "some text"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(put_json("/api/playback/rate", json!({"rate": 1.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(get("/api/playback")).await.unwrap();
    assert_eq!(body_json(response).await["rate"], 1.5);
}

#[tokio::test]
async fn it_should_conflict_when_no_asset_is_loaded() {
    let (app, _pipeline) = build_test_app().await;

    let response = app.oneshot(get("/api/playback/asset")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn it_should_list_supported_voices() {
    let (app, _pipeline) = build_test_app().await;

    let response = app.oneshot(get("/api/voices")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let voices = body_json(response).await;
    let ids: Vec<&str> = voices
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"Joanna"));
    assert!(ids.contains(&"Matthew"));
    assert!(ids.contains(&"Salli"));
}

#[tokio::test]
async fn it_should_report_health() {
    let (app, _pipeline) = build_test_app().await;

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ready");
}

#[tokio::test]
async fn it_should_reject_an_unknown_voice() {
    let (app, _pipeline) = build_test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/conversions",
            json!({"text": "hello", "voice": "Hal9000"}),
        ))
        .await
        .unwrap();

    // serde rejects the unknown enum variant during extraction
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
