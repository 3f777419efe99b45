//! # hearth-store
//!
//! Local persistence for the Hearth client, backed by SQLite.
//!
//! The store is a small key-value layer: the signed-in user and the current
//! family are serialized to JSON and written whole under fixed keys.  Every
//! save overwrites the previous snapshot; a snapshot that fails to decode is
//! treated as absent state rather than an error.

pub mod database;
pub mod migrations;
pub mod snapshots;

mod error;

pub use database::Database;
pub use error::StoreError;
