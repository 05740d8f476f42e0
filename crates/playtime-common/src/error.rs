//! Common error types used throughout playtime.
//!
//! Every failure a calculation can hit collapses into one of two kinds: the
//! input URL did not name a playlist, or something went wrong talking to the
//! upstream API. The detailed cause travels inside the variant for logging;
//! [`Error::user_message`] is what callers show to people.

/// Message shown when the input URL carries no playlist reference.
pub const INVALID_REFERENCE_MESSAGE: &str = "Invalid playlist URL";

/// Message shown for every upstream failure, whatever the cause.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching playlist duration";

/// Common error type for playtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input URL has no extractable playlist identifier.
    #[error("Invalid playlist reference: {0}")]
    InvalidReference(String),

    /// A network, authorization, timeout, or malformed-response failure.
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl Error {
    /// Create a new InvalidReference error.
    pub fn invalid_reference<S: Into<String>>(msg: S) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Create a new Upstream error.
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        Self::Upstream(msg.into())
    }

    /// The generic message to surface to users. The underlying cause is
    /// intentionally not part of it.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidReference(_) => INVALID_REFERENCE_MESSAGE,
            Self::Upstream(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }

    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, Self::InvalidReference(_))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
