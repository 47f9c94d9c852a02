//! Handlers for `/employees` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/employees` | Optional `?branch=<exact>&limit=<n>` |
//! | `POST`   | `/employees` | Body: input shape; 409 on duplicate `employee_no` |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PUT`    | `/employees/:id` | Full replacement; 404 if not found |
//! | `DELETE` | `/employees/:id` | Acknowledges whether or not a row existed |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use hr_core::{
  employee::{Employee, EmployeeDraft},
  store::{EmployeeQuery, EmployeeStore},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub branch: Option<String>,
  pub limit:  Option<usize>,
}

/// `GET /employees[?branch=<exact>][&limit=<n>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  let query = EmployeeQuery {
    // `?branch=` (present but empty) means no filter, same as absent.
    branch: params.branch.filter(|b| !b.is_empty()),
    limit:  params.limit,
  };

  let employees = store.list(&query).await.map_err(ApiError::from_store)?;
  Ok(Json(employees))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — body: input shape
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<EmployeeDraft>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let employee = store.create(draft).await.map_err(ApiError::from_store)?;
  Ok(Json(employee))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let employee = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id` — full replacement of every mutable field.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(draft): Json<EmployeeDraft>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let employee = store
    .update(id, draft)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
  Ok(Json(employee))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteAck {
  pub deleted_id: i64,
}

/// `DELETE /employees/:id`
///
/// Acknowledges the requested id whether or not a row existed; the second
/// delete of the same id is a successful no-op.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<DeleteAck>, ApiError>
where
  S: EmployeeStore,
{
  let removed = store.delete(id).await.map_err(ApiError::from_store)?;
  tracing::debug!(id, removed, "delete employee");
  Ok(Json(DeleteAck { deleted_id: id }))
}
