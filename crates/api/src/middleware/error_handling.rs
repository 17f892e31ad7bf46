//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Agenda
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Every error response shares the shape `{ "error": <message> }`. The
//! underlying store message passes through unaltered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use agenda_core::errors::AgendaError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `AgendaError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub AgendaError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            AgendaError::NotFound => StatusCode::NOT_FOUND,
            AgendaError::Validation(_) => StatusCode::BAD_REQUEST,
            AgendaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AgendaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from AgendaError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, AgendaError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Wraps the eyre error in an `AgendaError::Database` variant so that raw
/// store failures surface as 500 responses.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AgendaError::Database(err))
    }
}

/// Maps an AgendaError to an HTTP response
pub fn map_error(err: AgendaError) -> Response {
    AppError(err).into_response()
}
