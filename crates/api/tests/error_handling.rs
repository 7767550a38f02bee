//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use galleria_api::error::AppError;
use galleria_core::error::CoreError;
use galleria_core::exhibition::Exhibition;
use http_body_util::BodyExt;
use validator::Validate;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn core_validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Wall dimension must be positive".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Wall dimension must be positive");
}

#[tokio::test]
async fn invalid_request_returns_400_with_field_name() {
    let exhibition: Exhibition = serde_json::from_value(serde_json::json!({
        "id": "",
        "gallery": {
            "id": "g",
            "name": "Hall",
            "dimensions": { "x_axis": 10.0, "y_axis": 4.0, "z_axis": 10.0 },
            "wall_thickness": 0.2,
            "model": { "path": "/m.glb", "position": [0, 0, 0], "rotation": [0, 0, 0], "scale": 1.0 }
        }
    }))
    .unwrap();
    let err = AppError::from(exhibition.validate().unwrap_err());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("id"));
}
