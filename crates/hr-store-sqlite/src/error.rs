//! Error type for `hr-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] hr_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),
}

impl Error {
  /// Translate a UNIQUE-constraint failure on `employee.employee_no` into the
  /// domain conflict error; pass every other database error through.
  pub(crate) fn from_write(err: tokio_rusqlite::Error, employee_no: Option<String>) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, _)) = &err
      && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
      && let Some(no) = employee_no
    {
      return Error::Core(hr_core::Error::DuplicateEmployeeNo(no));
    }
    Error::Database(err)
  }
}

impl From<Error> for hr_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::Core(e) => e,
      other => hr_core::Error::Storage(Box::new(other)),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
