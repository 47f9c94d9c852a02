//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use hr_core::{
  employee::{Employee, EmployeeDraft},
  store::{DEFAULT_LIST_LIMIT, EmployeeQuery, EmployeeStore},
};

use crate::{
  Error, Result,
  encode::{EMPLOYEE_COLUMNS, RawEmployee, encode_date},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// connection is opened once at startup and shared by every request; SQLite's
/// own isolation is the only write coordination.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one row by id, already decoded.
  async fn fetch_by_id(&self, id: i64) -> Result<Option<Employee>> {
    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?1"),
            rusqlite::params![id],
            RawEmployee::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawEmployee::into_employee).transpose()
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  async fn create(&self, draft: EmployeeDraft) -> Result<Employee> {
    let employee_no = draft.employee_no.clone();
    let first_name  = draft.first_name.clone();
    let last_name   = draft.last_name.clone();
    let email       = draft.email.clone();
    let phone       = draft.phone.clone();
    let branch      = draft.branch.clone();
    let job_title   = draft.job_title.clone();
    let salary      = draft.salary;
    let date_hired  = draft.date_hired.map(encode_date);

    let no_for_conflict = employee_no.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employee (
             employee_no, first_name, last_name, email, phone,
             branch, job_title, salary, date_hired
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
          rusqlite::params![
            employee_no,
            first_name,
            last_name,
            email,
            phone,
            branch,
            job_title,
            salary,
            date_hired,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| Error::from_write(e, no_for_conflict))?;

    Ok(Employee::from_draft(id, draft))
  }

  async fn list(&self, query: &EmployeeQuery) -> Result<Vec<Employee>> {
    let branch = query.branch.clone();
    let limit  = query.limit.unwrap_or(DEFAULT_LIST_LIMIT) as i64;

    let raws: Vec<RawEmployee> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(b) = branch {
          let mut stmt = conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE branch = ?1 LIMIT ?2"
          ))?;
          stmt
            .query_map(rusqlite::params![b, limit], RawEmployee::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee LIMIT ?1"
          ))?;
          stmt
            .query_map(rusqlite::params![limit], RawEmployee::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEmployee::into_employee).collect()
  }

  async fn get(&self, id: i64) -> Result<Option<Employee>> {
    self.fetch_by_id(id).await
  }

  async fn update(&self, id: i64, draft: EmployeeDraft) -> Result<Option<Employee>> {
    let employee_no = draft.employee_no;
    let first_name  = draft.first_name;
    let last_name   = draft.last_name;
    let email       = draft.email;
    let phone       = draft.phone;
    let branch      = draft.branch;
    let job_title   = draft.job_title;
    let salary      = draft.salary;
    let date_hired  = draft.date_hired.map(encode_date);

    let no_for_conflict = employee_no.clone();

    // The write goes out unconditionally; existence is checked by the
    // re-read afterwards. An update against a missing id is a no-op write.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE employee SET
             employee_no = ?1, first_name = ?2, last_name = ?3, email = ?4,
             phone = ?5, branch = ?6, job_title = ?7, salary = ?8,
             date_hired = ?9
           WHERE id = ?10",
          rusqlite::params![
            employee_no,
            first_name,
            last_name,
            email,
            phone,
            branch,
            job_title,
            salary,
            date_hired,
            id,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| Error::from_write(e, no_for_conflict))?;

    self.fetch_by_id(id).await
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let removed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM employee WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(removed > 0)
  }
}
