//! The `EmployeeStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `hr-store-sqlite`).
//! The HTTP layer (`hr-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::employee::{Employee, EmployeeDraft};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Default result-count limit for [`EmployeeStore::list`].
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Parameters for [`EmployeeStore::list`].
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
  /// Exact-match filter on the `branch` column.
  pub branch: Option<String>,
  /// Row cap; [`DEFAULT_LIST_LIMIT`] when unset. No maximum is enforced.
  pub limit:  Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an employee store backend.
///
/// Every operation is a single-row, single-statement affair; the backend's
/// transaction isolation is the only concurrency coordination. Concurrent
/// writers to the same id get whatever the engine's default isolation
/// produces.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: Into<crate::Error> + std::error::Error + Send + Sync + 'static;

  /// Insert a new employee; the engine assigns the id.
  ///
  /// Fails with a [`DuplicateEmployeeNo`](crate::Error::DuplicateEmployeeNo)
  /// conversion when `draft.employee_no` collides with an existing row.
  fn create(
    &self,
    draft: EmployeeDraft,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// List employees matching `query`, truncated to its limit.
  ///
  /// Ordering is whatever the engine returns by default; it is not
  /// guaranteed stable.
  fn list<'a>(
    &'a self,
    query: &'a EmployeeQuery,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + 'a;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Replace every draft field of the row matching `id`, then re-read it.
  ///
  /// Returns `None` when the row does not exist. The existence check runs
  /// after the write is issued, so an update against a missing id performs a
  /// wasted (no-op) write before reporting `None`.
  fn update(
    &self,
    id: i64,
    draft: EmployeeDraft,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Hard-delete the row matching `id` if present.
  ///
  /// Returns whether a row was actually removed. Callers that treat delete
  /// as idempotent are free to ignore the flag.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
