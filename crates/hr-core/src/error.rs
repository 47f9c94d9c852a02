//! Error types for `hr-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee not found: {0}")]
  EmployeeNotFound(i64),

  #[error("employee_no {0:?} is already taken")]
  DuplicateEmployeeNo(String),

  /// Backend failure with no domain meaning (connectivity, corruption, ...).
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
