//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a backend error into its HTTP-facing shape.
  ///
  /// Domain errors (duplicate `employee_no`, known-missing id) get named
  /// client-facing statuses; anything else stays an opaque 500.
  pub fn from_store<E>(err: E) -> Self
  where
    E: Into<hr_core::Error>,
  {
    match err.into() {
      hr_core::Error::EmployeeNotFound(id) => {
        ApiError::NotFound(format!("employee {id} not found"))
      }
      hr_core::Error::DuplicateEmployeeNo(no) => {
        ApiError::Conflict(format!("employee_no {no:?} is already taken"))
      }
      hr_core::Error::Storage(e) => ApiError::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
