use thiserror::Error;

/// Errors surfaced by the application state manager.
///
/// A missing precondition (no user, no family, no pet) is not an error; it
/// comes back as [`OpOutcome::Skipped`](crate::OpOutcome::Skipped).
#[derive(Error, Debug)]
pub enum AppError {
    /// A remote operation failed and no fallback applied.
    #[error("Remote error: {0}")]
    Remote(#[from] hearth_remote::RemoteError),

    /// Local persistence failed.
    #[error("Store error: {0}")]
    Store(#[from] hearth_store::StoreError),

    /// A malformed invite code was rejected before reaching the facade.
    #[error(transparent)]
    Invite(#[from] hearth_shared::InviteError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
