//! Employee — the sole persisted entity.
//!
//! Two shapes exist: [`EmployeeDraft`] is what callers submit (no `id`), and
//! [`Employee`] is what the store hands back (`id` assigned by the engine).
//! Updates are full replacements of every draft field, never partial patches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The caller-supplied shape of an employee record.
///
/// `first_name` and `last_name` are mandatory; every other field defaults to
/// `None` when absent from the request body. No cross-field validation is
/// performed (a `date_hired` in the future is accepted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
  #[serde(default)]
  pub employee_no: Option<String>,
  pub first_name:  String,
  pub last_name:   String,
  #[serde(default)]
  pub email:       Option<String>,
  #[serde(default)]
  pub phone:       Option<String>,
  #[serde(default)]
  pub branch:      Option<String>,
  #[serde(default)]
  pub job_title:   Option<String>,
  #[serde(default)]
  pub salary:      Option<f64>,
  #[serde(default)]
  pub date_hired:  Option<NaiveDate>,
}

/// A persisted employee record: the draft fields plus the engine-assigned id.
///
/// `id` is immutable once assigned; `employee_no`, when present, is unique
/// across all records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:          i64,
  pub employee_no: Option<String>,
  pub first_name:  String,
  pub last_name:   String,
  pub email:       Option<String>,
  pub phone:       Option<String>,
  pub branch:      Option<String>,
  pub job_title:   Option<String>,
  pub salary:      Option<f64>,
  pub date_hired:  Option<NaiveDate>,
}

impl Employee {
  /// Attach an engine-assigned id to a draft.
  pub fn from_draft(id: i64, draft: EmployeeDraft) -> Self {
    Self {
      id,
      employee_no: draft.employee_no,
      first_name:  draft.first_name,
      last_name:   draft.last_name,
      email:       draft.email,
      phone:       draft.phone,
      branch:      draft.branch,
      job_title:   draft.job_title,
      salary:      draft.salary,
      date_hired:  draft.date_hired,
    }
  }
}
