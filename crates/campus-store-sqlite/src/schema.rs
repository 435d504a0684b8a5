//! SQL schema for the Campus SQLite store.
//!
//! One table per entity collection, each a plain `id → record` map. The
//! primary key doubles as the iteration order.

use campus_core::{
  Entity,
  schema::{Assignment, Class, Student, Subject, Submission, Teacher},
};

/// Every collection that gets a table.
pub const COLLECTIONS: [&str; 6] = [
  Student::COLLECTION,
  Subject::COLLECTION,
  Teacher::COLLECTION,
  Class::COLLECTION,
  Assignment::COLLECTION,
  Submission::COLLECTION,
];

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub fn schema() -> String {
  let mut sql = String::from("PRAGMA journal_mode = WAL;\n");
  for table in COLLECTIONS {
    sql.push_str(&format!(
      "CREATE TABLE IF NOT EXISTS {table} (
    id      TEXT PRIMARY KEY,
    record  TEXT NOT NULL   -- JSON-encoded entity
) WITHOUT ROWID;\n"
    ));
  }
  sql.push_str("PRAGMA user_version = 1;\n");
  sql
}
