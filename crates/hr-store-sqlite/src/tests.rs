//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use hr_core::{
  employee::EmployeeDraft,
  store::{EmployeeQuery, EmployeeStore},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn minimal_draft(first: &str, last: &str) -> EmployeeDraft {
  EmployeeDraft {
    employee_no: None,
    first_name:  first.into(),
    last_name:   last.into(),
    email:       None,
    phone:       None,
    branch:      None,
    job_title:   None,
    salary:      None,
    date_hired:  None,
  }
}

fn full_draft() -> EmployeeDraft {
  EmployeeDraft {
    employee_no: Some("E-1001".into()),
    first_name:  "Ana".into(),
    last_name:   "Cruz".into(),
    email:       Some("ana.cruz@example.com".into()),
    phone:       Some("+63 912 555 0101".into()),
    branch:      Some("North".into()),
    job_title:   Some("Analyst".into()),
    salary:      Some(52_000.0),
    date_hired:  NaiveDate::from_ymd_opt(2023, 4, 17),
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_with_required_fields_only_assigns_positive_id() {
  let s = store().await;

  let emp = s.create(minimal_draft("Ana", "Cruz")).await.unwrap();
  assert!(emp.id > 0);
  assert_eq!(emp.first_name, "Ana");
  assert_eq!(emp.last_name, "Cruz");
  assert!(emp.employee_no.is_none());
  assert!(emp.salary.is_none());
}

#[tokio::test]
async fn create_roundtrips_every_field() {
  let s = store().await;

  let created = s.create(full_draft()).await.unwrap();
  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_employee_no_is_a_named_conflict() {
  let s = store().await;

  s.create(full_draft()).await.unwrap();

  let mut dup = minimal_draft("Ben", "Reyes");
  dup.employee_no = Some("E-1001".into());
  let err = s.create(dup).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(hr_core::Error::DuplicateEmployeeNo(ref no)) if no == "E-1001"
  ));
}

#[tokio::test]
async fn ids_are_distinct_across_creates() {
  let s = store().await;

  let a = s.create(minimal_draft("Ana", "Cruz")).await.unwrap();
  let b = s.create(minimal_draft("Ben", "Reyes")).await.unwrap();
  assert_ne!(a.id, b.id);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_branch_exactly() {
  let s = store().await;

  let mut north = minimal_draft("Ana", "Cruz");
  north.branch = Some("North".into());
  let mut south = minimal_draft("Ben", "Reyes");
  south.branch = Some("South".into());

  s.create(north).await.unwrap();
  s.create(south).await.unwrap();
  s.create(minimal_draft("Caryl", "Dizon")).await.unwrap();

  let query = EmployeeQuery { branch: Some("North".into()), limit: None };
  let rows = s.list(&query).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].branch.as_deref(), Some("North"));
}

#[tokio::test]
async fn list_without_filter_returns_all() {
  let s = store().await;

  s.create(minimal_draft("Ana", "Cruz")).await.unwrap();
  s.create(minimal_draft("Ben", "Reyes")).await.unwrap();
  s.create(minimal_draft("Caryl", "Dizon")).await.unwrap();

  let rows = s.list(&EmployeeQuery::default()).await.unwrap();
  assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn list_truncates_to_limit() {
  let s = store().await;

  for i in 0..5 {
    s.create(minimal_draft(&format!("Emp{i}"), "Test")).await.unwrap();
  }

  let query = EmployeeQuery { branch: None, limit: Some(2) };
  let rows = s.list(&query).await.unwrap();
  assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn list_branch_filter_with_no_matches_is_empty() {
  let s = store().await;
  s.create(minimal_draft("Ana", "Cruz")).await.unwrap();

  let query = EmployeeQuery { branch: Some("Nowhere".into()), limit: None };
  assert!(s.list(&query).await.unwrap().is_empty());
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_id_returns_none() {
  let s = store().await;
  assert!(s.get(9999).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_replaces_every_field() {
  let s = store().await;

  let created = s.create(full_draft()).await.unwrap();

  let mut replacement = minimal_draft("Anita", "Cruz-Lim");
  replacement.branch = Some("East".into());
  let updated = s.update(created.id, replacement).await.unwrap().unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.first_name, "Anita");
  assert_eq!(updated.last_name, "Cruz-Lim");
  assert_eq!(updated.branch.as_deref(), Some("East"));
  // Optionals omitted from the replacement are cleared, not preserved.
  assert!(updated.employee_no.is_none());
  assert!(updated.email.is_none());
  assert!(updated.salary.is_none());
  assert!(updated.date_hired.is_none());
}

#[tokio::test]
async fn update_missing_id_returns_none_and_creates_nothing() {
  let s = store().await;

  let result = s.update(42, minimal_draft("Ghost", "Row")).await.unwrap();
  assert!(result.is_none());

  assert!(s.list(&EmployeeQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_to_taken_employee_no_is_a_named_conflict() {
  let s = store().await;

  s.create(full_draft()).await.unwrap();
  let other = s.create(minimal_draft("Ben", "Reyes")).await.unwrap();

  let mut clash = minimal_draft("Ben", "Reyes");
  clash.employee_no = Some("E-1001".into());
  let err = s.update(other.id, clash).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(hr_core::Error::DuplicateEmployeeNo(_))
  ));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_the_row() {
  let s = store().await;

  let emp = s.create(minimal_draft("Ana", "Cruz")).await.unwrap();
  assert!(s.delete(emp.id).await.unwrap());
  assert!(s.get(emp.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_twice_reports_second_as_no_op() {
  let s = store().await;

  let emp = s.create(minimal_draft("Ana", "Cruz")).await.unwrap();
  assert!(s.delete(emp.id).await.unwrap());
  assert!(!s.delete(emp.id).await.unwrap());
}

#[tokio::test]
async fn deleted_employee_no_becomes_available_again() {
  let s = store().await;

  let emp = s.create(full_draft()).await.unwrap();
  s.delete(emp.id).await.unwrap();

  // Hard delete frees the unique employee_no for reuse.
  s.create(full_draft()).await.unwrap();
}
