//! Error Types
//!
//! Local validation failures, remote request failures, and the union of both.

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Request(String),
}

/// Rejected before any request is issued. Messages are shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Invalid file type. Allowed: JPG, JPEG, PNG, GIF, WebP")]
    UnsupportedPhotoType(String),
    #[error("File is too large. Maximum size is 10MB")]
    PhotoTooLarge(u64),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] ApiError),
}

pub type AppResult<T> = Result<T, AppError>;

/// How a mutation that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Local state now reflects the server
    Applied,
    /// The user said no at the confirmation prompt; nothing was sent
    Declined,
    /// The target is no longer held locally, or the state it belonged to is gone
    Stale,
}
