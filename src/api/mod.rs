//! # API Module
//!
//! HTTP endpoints for the local callback server used during the OAuth 2.0
//! PKCE flow. The server exists only for the duration of a login attempt:
//! Spotify redirects the user's browser to it, and the handler captures the
//! query parameters for the session manager to validate.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the OAuth redirect and records the raw `code`,
//!   `state`, and `error` parameters into shared state. Validation (CSRF
//!   state check, code exchange) deliberately does NOT happen here; it lives
//!   in `management::SessionManager::complete_login` where it can be tested
//!   without a server.
//! - [`health`] - Liveness endpoint returning name and version.
//!
//! Built on [Axum](https://docs.rs/axum); both handlers are plain async
//! functions wired up in `crate::server`.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
