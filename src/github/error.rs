// src/github/error.rs
// =============================================================================
// Errors that can come back from a GitHub fetch.
//
// The Display text of each variant is the message shown to the user, so
// the lookup coordinator can turn any error into a Failure state with
// `err.to_string()`.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The profile endpoint answered 404.
    #[error("User not found")]
    UserNotFound,

    /// The repository listing answered 404.
    #[error("Repositories not found")]
    RepositoriesNotFound,

    /// Any other non-success status.
    #[error("GitHub API error (HTTP {})", .status.as_u16())]
    Upstream { status: StatusCode },

    /// The request never got a response (DNS, TLS, connection reset, ...).
    #[error("Could not reach GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON shape we expected.
    #[error("Unexpected response from GitHub: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when GitHub told us the account (or its repositories) doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FetchError::UserNotFound | FetchError::RepositoriesNotFound
        )
    }

    /// True for failures on GitHub's side or in transit. A malformed payload
    /// counts as one of these too.
    pub fn is_upstream(&self) -> bool {
        !self.is_not_found()
    }
}
