use thiserror::Error;

/// Errors produced by the remote access layer.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The server's response body could not be decoded.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// A malformed invite code was rejected before any network call.
    #[error(transparent)]
    Invite(#[from] hearth_shared::InviteError),
}
