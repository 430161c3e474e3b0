//! # CLI Module
//!
//! This module provides the command-line interface layer for Playgen, a
//! Spotify playlist generator. It implements the user-facing commands and
//! coordinates between the session manager, the track-resolution engine,
//! the publisher, and the terminal.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the OAuth 2.0 PKCE flow: starts the local callback
//!   server, opens the authorization page in the browser, waits for the
//!   redirect, and completes the login through the session manager.
//! - [`logout`] - Clears the session and every stored credential.
//!
//! ### Playlist Generation
//!
//! - [`generate`] - Resolves an intent (mood, genre, or artist) into a
//!   track list, shows a preview, creates the playlist, and prints its URL.
//!
//! ### Information
//!
//! - [`whoami`] - Shows the authenticated user's profile.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session, Resolution, Publishing)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the management layer while handling user
//! interaction, progress feedback, and error presentation. Terminal errors
//! use the `error!` macro, which prints and exits; recoverable conditions
//! use `warning!` and continue.

mod auth;
mod logout;
mod playlist;
mod whoami;

pub use auth::auth;
pub use logout::logout;
pub use playlist::generate;
pub use whoami::whoami;
