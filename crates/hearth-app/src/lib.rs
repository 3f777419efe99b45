//! # hearth-app
//!
//! The application state manager: the single stateful orchestrator of the
//! Hearth client.
//!
//! [`AppManager`] owns the session state (current user, current family,
//! feed, notifications) and every mutating operation: authentication,
//! family management, location/activity sharing, house editing, pet care
//! and avatar changes.  It drives the persistence layer (`hearth-store`)
//! and the remote facade (`hearth-remote`); nothing else in the client
//! writes state.
//!
//! All methods take `&mut self`, so ownership enforces the single-writer
//! rule.  Embedders that share the manager across threads must wrap it in a
//! mutex or an actor task; completions arriving after a later state change
//! are last-write-wins.

pub mod manager;
pub mod state;

mod error;

pub use error::AppError;
pub use manager::AppManager;
pub use state::{AnimationKind, OpOutcome, Phase, SessionState, SkipReason};

use tracing_subscriber::{fmt, EnvFilter};

/// Install the default tracing subscriber for the Hearth client.
///
/// Honors `RUST_LOG`; defaults to debug-level output for the hearth crates
/// and warnings for everything else.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("hearth_app=debug,hearth_remote=debug,hearth_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
