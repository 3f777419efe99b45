//! v001 -- Initial schema creation.
//!
//! Creates the single `snapshots` key-value table that holds the persisted
//! user and family records as JSON blobs.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Snapshots (whole-record JSON blobs under fixed keys)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS snapshots (
    key        TEXT PRIMARY KEY NOT NULL,   -- fixed key, e.g. "currentUser"
    value      BLOB NOT NULL,               -- JSON-encoded record
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
