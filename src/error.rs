//! Error taxonomy for the playlist generator.
//!
//! Only terminal failures surface to the user: a failed or rejected login,
//! an intent that resolves to zero tracks, or a rejected playlist creation.
//! Transient failures of individual catalog calls are absorbed by the
//! resolution engine as empty contributions and never appear here.

use thiserror::Error;

/// Failures of the PKCE authorization and token lifecycle.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authorization server reported an error in the callback.
    #[error("authorization was denied: {0}")]
    Provider(String),

    /// The callback carried no authorization code.
    #[error("callback is missing the authorization code")]
    MissingCode,

    /// The `state` parameter did not match the stored challenge.
    #[error("state mismatch in callback, possible CSRF")]
    StateMismatch,

    /// No PKCE challenge was pending for this callback.
    #[error("no login attempt is pending")]
    NoPendingLogin,

    /// The token endpoint rejected the exchange.
    #[error("token exchange failed with status {0}")]
    TokenExchange(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the track-resolution engine.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The artist name search produced no match.
    #[error("no artist found matching '{0}'")]
    ArtistNotFound(String),

    /// Every strategy yielded zero tracks.
    #[error("no tracks found for {0}")]
    NoTracks(String),
}

/// Failures of the playlist publisher.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Playlist creation was rejected by the API.
    #[error("playlist creation failed: {0}")]
    Create(String),
}

/// A single upstream catalog call that failed.
///
/// The resolution engine absorbs these as empty contributions; they only
/// become user-visible when every strategy comes back empty.
#[derive(Debug, Error)]
#[error("upstream call failed: {0}")]
pub struct UpstreamError(pub String);

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError(err.to_string())
    }
}

/// Failures of the credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
