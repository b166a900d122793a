use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::submission::router::submit_handler;
use crate::submission::SubmissionService;

fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload serializes")))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_localizes_items_and_scale() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/meq30/questions?locale=fa")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["locale"], "fa");
    assert_eq!(body["items"].as_array().map(Vec::len), Some(30));
    assert_eq!(body["items"][0]["canonical_id"], 35);
    assert_eq!(body["items"][0]["subscale"], "mystical");
    assert_eq!(body["scale"][5]["label"], "شدید");
}

#[tokio::test]
async fn score_route_returns_scores_and_interpretation() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let payload = json!({ "answers": mystical_only_answers(), "locale": "en" });

    let response = router
        .oneshot(json_request("/api/v1/meq30/score", &payload))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["record"]["mystical_percentage"], 100.0);
    assert_eq!(body["record"]["positive_mood_percentage"], 0.0);
    assert_eq!(body["record"]["complete_mystical"], false);
    assert_eq!(body["interpretation"]["key"], "meq30_repo");
    assert_eq!(body["interpretation"]["factors"][0]["subscale"], "mystical");
}

#[tokio::test]
async fn score_route_names_the_invalid_item() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let mut answers = serde_json::to_value(mystical_only_answers()).expect("answers serialize");
    answers["23"] = json!(2.5);

    let response = router
        .oneshot(json_request(
            "/api/v1/meq30/score",
            &json!({ "answers": answers }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["item_id"], 23);
    assert_eq!(body["detail"]["reason"], "not_integer");
}

#[tokio::test]
async fn submit_and_fetch_round_trip_through_the_router() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let request = submit_request();

    let response = router
        .clone()
        .oneshot(json_request(
            "/api/v1/meq30/submit",
            &serde_json::to_value(&request).expect("request serializes"),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    assert_eq!(body["ok"], true);
    let experience_id = body["experience_id"]
        .as_str()
        .expect("experience id returned")
        .to_string();

    let response = router
        .oneshot(
            Request::get(format!("/api/v1/meq30/experiences/{experience_id}?locale=fa"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["experience_id"], experience_id);
    assert_eq!(body["title"], "Retreat, day three");
    assert_eq!(body["interpretation"]["locale"], "fa");
}

#[tokio::test]
async fn unknown_experience_is_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/meq30/experiences/exp-404")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submit_handler_maps_input_defects_to_bad_request() {
    let (service, _) = build_service();
    let mut request = submit_request();
    request.language = "de".to_string();

    let response = submit_handler(State(Arc::new(service)), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "unsupported language 'de'");
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(SubmissionService::new(
        Arc::new(UnavailableStore),
        interpreter(),
    ));

    let response = submit_handler::<UnavailableStore>(State(service), axum::Json(submit_request()))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
