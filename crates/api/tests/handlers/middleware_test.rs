use axum::http::StatusCode;

use agenda_api::middleware::error_handling::{map_error, AppError};
use agenda_core::errors::AgendaError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = AgendaError::NotFound;

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The not-found body carries the fixed localized message
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Agendamento não encontrado" }));
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = AgendaError::Validation("invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = AgendaError::Database(eyre::eyre!("database error"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = AgendaError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_body_passes_message_through() {
    // The raw underlying message reaches the response body unaltered
    let error = AgendaError::Validation("null value in column \"hora\"".to_string());

    let response = map_error(error);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        body,
        serde_json::json!({ "error": "null value in column \"hora\"" })
    );
}

#[tokio::test]
async fn test_app_error_from_eyre_report() {
    let err: AppError = eyre::eyre!("pool exhausted").into();

    let response = axum::response::IntoResponse::into_response(err);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
