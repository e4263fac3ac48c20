//! HTTP-level tests against the real router
//!
//! These run without model artifacts: they exercise the unloaded state,
//! request validation, and response serialization.

use crate::classifiers::labels::{DomainLabel, IntentLabel};
use crate::server::error::ApiError;
use crate::server::responses::{ClassificationResponse, Layer1Result, Layer2Result};
use crate::server::{build_router, AppState};
use crate::validation_error;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn classify_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_unloaded_models() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["models_loaded"], false);
    assert_eq!(json["status"], "loading");
}

#[tokio::test]
async fn test_classify_without_models_is_service_unavailable() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(classify_request(r#"{"message": "What is EBITDA?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("not loaded"));
}

#[tokio::test]
async fn test_classify_empty_message_is_validation_error() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(classify_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    // Validation runs before the model-availability check.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_classify_missing_message_field_is_rejected() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(classify_request(r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_classify_malformed_json_is_rejected() {
    let router = build_router(AppState::new());

    let response = router.oneshot(classify_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_gate_validation_errors_map_to_bad_request() {
    let err: ApiError = validation_error!("message", "non-empty text", "blank").into();
    assert!(matches!(err, ApiError::Validation(_)));

    let err: ApiError = crate::core::error::model_errors::tokenizer_failure("broken").into();
    assert!(matches!(err, ApiError::Internal(_)));
}

#[test]
fn test_response_omits_layer2_when_gate_rejects() {
    let response = ClassificationResponse {
        layer1: Layer1Result {
            label: DomainLabel::NonFinance,
            confidence: 0.93,
        },
        layer2: None,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["layer1"]["label"], "non_finance");
    assert!(json.get("layer2").is_none());
}

#[test]
fn test_response_includes_layer2_when_gate_accepts() {
    let response = ClassificationResponse {
        layer1: Layer1Result {
            label: DomainLabel::Finance,
            confidence: 0.98,
        },
        layer2: Some(Layer2Result {
            label: IntentLabel::AnswerSubmission,
            confidence: 0.77,
        }),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["layer1"]["label"], "finance");
    assert_eq!(json["layer2"]["label"], "answer_submission");
}
