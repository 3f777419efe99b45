//! # hearth-remote
//!
//! Remote access facade for the Hearth client.
//!
//! The facade covers three capability groups: authentication (sign-up,
//! sign-in, sign-out, session lookup), family management (create, join) and
//! messaging / avatar upload.  Each call either delegates to a remote HTTP
//! backend or resolves locally after a fixed artificial delay (simulation
//! mode, used when no server is configured and as the test double).
//!
//! When the remote backend fails on sign-in or family create/join, the
//! facade can substitute the simulated result instead of surfacing the
//! error.  That offline fallback is an explicit, configurable policy rather
//! than hard-coded behavior.

pub mod config;
pub mod facade;
pub mod http;
pub mod simulated;

mod error;

pub use config::RemoteConfig;
pub use error::RemoteError;
pub use facade::{RemoteFacade, RemoteIdentity};
pub use http::HttpBackend;
pub use simulated::SimulatedBackend;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RemoteError>;
