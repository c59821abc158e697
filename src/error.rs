use std::path::PathBuf;

use thiserror::Error;

/// Every way a conversion, or one of its collaborators, can fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "credential file {} not found. Authenticate with YouTube Music first.",
        .path.display()
    )]
    CredentialsMissing { path: PathBuf },

    #[error("failed to refresh access token: {0}. Reauthenticate with YouTube Music.")]
    TokenRefreshFailed(String),

    #[error("invalid Spotify playlist link: {0}")]
    InvalidPlaylistUrl(String),

    #[error("no tracks found or invalid playlist")]
    NoTracksFound,

    #[error("no songs found on YouTube Music")]
    NoMatchesFound,

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("unexpected response from {endpoint} ({status}): {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Failures that require the user to redo the YouTube Music authentication.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            ConvertError::CredentialsMissing { .. } | ConvertError::TokenRefreshFailed(_)
        )
    }
}
