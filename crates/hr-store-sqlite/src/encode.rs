//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Calendar dates are stored as ISO 8601 `YYYY-MM-DD` strings. Everything
//! else maps directly onto a native SQLite column type.

use chrono::NaiveDate;
use hr_core::employee::Employee;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column order shared by every SELECT against the `employee` table.
pub const EMPLOYEE_COLUMNS: &str =
  "id, employee_no, first_name, last_name, email, phone, branch, job_title, salary, date_hired";

/// Raw values read directly from an `employee` row.
pub struct RawEmployee {
  pub id:          i64,
  pub employee_no: Option<String>,
  pub first_name:  String,
  pub last_name:   String,
  pub email:       Option<String>,
  pub phone:       Option<String>,
  pub branch:      Option<String>,
  pub job_title:   Option<String>,
  pub salary:      Option<f64>,
  pub date_hired:  Option<String>,
}

impl RawEmployee {
  /// Map a full-width `SELECT` row ([`EMPLOYEE_COLUMNS`] order).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      employee_no: row.get(1)?,
      first_name:  row.get(2)?,
      last_name:   row.get(3)?,
      email:       row.get(4)?,
      phone:       row.get(5)?,
      branch:      row.get(6)?,
      job_title:   row.get(7)?,
      salary:      row.get(8)?,
      date_hired:  row.get(9)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    let date_hired = self.date_hired.as_deref().map(decode_date).transpose()?;

    Ok(Employee {
      id:          self.id,
      employee_no: self.employee_no,
      first_name:  self.first_name,
      last_name:   self.last_name,
      email:       self.email,
      phone:       self.phone,
      branch:      self.branch,
      job_title:   self.job_title,
      salary:      self.salary,
      date_hired,
    })
  }
}
