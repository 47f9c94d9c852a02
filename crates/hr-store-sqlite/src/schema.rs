//! SQL schema for the HR SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employee (
    id          INTEGER PRIMARY KEY,
    employee_no TEXT UNIQUE,      -- optional, unique when present
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT,
    phone       TEXT,
    branch      TEXT,
    job_title   TEXT,
    salary      REAL,
    date_hired  TEXT              -- ISO 8601 calendar date or NULL
);

CREATE INDEX IF NOT EXISTS employee_branch_idx ON employee(branch);

PRAGMA user_version = 1;
";
