//! Whole-record snapshot persistence.
//!
//! Two fixed keys are in use: one for the signed-in user and one for the
//! current family.  Records are serialized to JSON bytes and overwritten in
//! full on every save.  A missing or undecodable snapshot loads as `None`;
//! the decode failure is logged and swallowed, never surfaced.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use hearth_shared::constants::{KEY_CURRENT_FAMILY, KEY_CURRENT_USER};
use hearth_shared::{Family, User};

use crate::database::Database;
use crate::error::Result;

impl Database {
    // ------------------------------------------------------------------
    // Raw key-value contract
    // ------------------------------------------------------------------

    /// Store raw bytes under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Fetch the bytes stored under a key, if any.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Remove the value stored under a key.  Returns `true` if a row was
    /// deleted.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM snapshots WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // Typed snapshots
    // ------------------------------------------------------------------

    /// Persist the signed-in user.
    pub fn save_user(&self, user: &User) -> Result<()> {
        self.save_record(KEY_CURRENT_USER, user)
    }

    /// Load the signed-in user, if a valid snapshot exists.
    pub fn load_user(&self) -> Result<Option<User>> {
        self.load_record(KEY_CURRENT_USER)
    }

    /// Persist the current family.
    pub fn save_family(&self, family: &Family) -> Result<()> {
        self.save_record(KEY_CURRENT_FAMILY, family)
    }

    /// Load the current family, if a valid snapshot exists.
    pub fn load_family(&self) -> Result<Option<Family>> {
        self.load_record(KEY_CURRENT_FAMILY)
    }

    fn save_record<T: Serialize>(&self, key: &str, record: &T) -> Result<()> {
        let bytes = serde_json::to_vec(record)?;
        self.set(key, &bytes)
    }

    fn load_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(bytes) = self.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // An undecodable snapshot is treated as absent state.
                tracing::warn!(key, error = %e, "discarding undecodable snapshot");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_shared::{Avatar, House};

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn user_snapshot_round_trip() {
        let db = db();
        let user = User::new("Ann", "ann@x.com", Avatar::default());

        db.save_user(&user).unwrap();
        let loaded = db.load_user().unwrap().expect("user should be present");
        assert_eq!(loaded, user);
    }

    #[test]
    fn family_snapshot_round_trip() {
        let db = db();
        let founder = User::new("Ann", "ann@x.com", Avatar::default());
        let family = Family::new("Smiths", founder, House::starter());

        db.save_family(&family).unwrap();
        let loaded = db.load_family().unwrap().expect("family should be present");
        assert_eq!(loaded, family);
    }

    #[test]
    fn missing_snapshot_loads_as_none() {
        let db = db();
        assert!(db.load_user().unwrap().is_none());
        assert!(db.load_family().unwrap().is_none());
    }

    #[test]
    fn corrupt_snapshot_loads_as_none() {
        let db = db();
        db.set(KEY_CURRENT_USER, b"{ not json").unwrap();
        assert!(db.load_user().unwrap().is_none());
    }

    #[test]
    fn save_overwrites_whole_record() {
        let db = db();
        let mut user = User::new("Ann", "ann@x.com", Avatar::default());
        db.save_user(&user).unwrap();

        user.name = "Annette".into();
        db.save_user(&user).unwrap();

        let loaded = db.load_user().unwrap().unwrap();
        assert_eq!(loaded.name, "Annette");
    }

    #[test]
    fn remove_clears_the_key() {
        let db = db();
        let user = User::new("Ann", "ann@x.com", Avatar::default());
        db.save_user(&user).unwrap();

        assert!(db.remove(KEY_CURRENT_USER).unwrap());
        assert!(db.load_user().unwrap().is_none());
        assert!(!db.remove(KEY_CURRENT_USER).unwrap());
    }
}
