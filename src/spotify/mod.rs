//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! playlist generator: the OAuth 2.0 PKCE token operations, catalog queries
//! (search, recommendations, artist discography), and playlist management.
//! It is the only layer that talks HTTP; everything above it works against
//! the [`Catalog`] trait.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Catalog trait  ←  WebCatalog (production impl)
//!     ├── Authentication (OAuth 2.0 PKCE token exchange/refresh)
//!     ├── Search (tracks, artist top-match)
//!     ├── Recommendations (seed genres, seed artists)
//!     ├── Artist Operations (top tracks, albums, album tracks)
//!     ├── Profile (current user)
//!     └── Playlist Operations (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Token exchange and refresh for the PKCE flow. The
//!   authorization URL is built here too; the interactive part of the flow
//!   (browser, local callback server) lives in the `cli` and `server`
//!   modules.
//! - [`search`] - Keyword track search and artist name resolution.
//! - [`recommendations`] - Seed-genre and seed-artist recommendation
//!   queries.
//! - [`artists`] - Top tracks, discography, and album track listings.
//! - [`profile`] - The authenticated user's profile.
//! - [`playlist`] - Playlist creation and batched track addition.
//!
//! ## Error Handling
//!
//! Every endpoint function surfaces non-2xx responses as errors
//! (`error_for_status`). Callers decide what is fatal: the resolution
//! engine treats individual query failures as empty results, while the
//! artist name lookup, token exchange, and playlist creation are hard
//! failures.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /search` - track and artist search
//! - `GET /recommendations` - seeded track suggestions
//! - `GET /artists/{id}/top-tracks` - an artist's most popular tracks
//! - `GET /artists/{id}/albums` - an artist's discography
//! - `GET /albums/{id}/tracks` - an album's track listing
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks
//! - `POST /api/token` - token exchange and refresh
//!
//! All catalog requests carry `Authorization: Bearer <access token>`.

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod profile;
pub mod recommendations;
pub mod search;

use crate::error::UpstreamError;
use crate::types::{
    AddTracksResponse, AlbumSummary, Artist, CreatePlaylistRequest, CreatePlaylistResponse, Track,
    UserProfile,
};

/// The catalog surface consumed by the resolution engine and the publisher.
///
/// The production implementation is [`WebCatalog`]; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    async fn me(&self, token: &str) -> Result<UserProfile, UpstreamError>;

    async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError>;

    /// Resolves an artist name to its top search match, if any.
    async fn search_artist(&self, token: &str, name: &str)
    -> Result<Option<Artist>, UpstreamError>;

    async fn recommend_by_genres(
        &self,
        token: &str,
        seed_genres: &[String],
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError>;

    async fn recommend_by_artist(
        &self,
        token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError>;

    async fn artist_top_tracks(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<Vec<Track>, UpstreamError>;

    async fn artist_albums(
        &self,
        token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>, UpstreamError>;

    async fn album_tracks(
        &self,
        token: &str,
        album_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError>;

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, UpstreamError>;

    async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTracksResponse, UpstreamError>;
}

/// Production [`Catalog`] backed by the Spotify Web API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebCatalog;

impl WebCatalog {
    pub fn new() -> Self {
        WebCatalog
    }
}

impl Catalog for WebCatalog {
    async fn me(&self, token: &str) -> Result<UserProfile, UpstreamError> {
        Ok(profile::me(token).await?)
    }

    async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        Ok(search::search_tracks(token, query, limit).await?)
    }

    async fn search_artist(
        &self,
        token: &str,
        name: &str,
    ) -> Result<Option<Artist>, UpstreamError> {
        Ok(search::search_artist(token, name).await?)
    }

    async fn recommend_by_genres(
        &self,
        token: &str,
        seed_genres: &[String],
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        Ok(recommendations::by_genres(token, seed_genres, limit).await?)
    }

    async fn recommend_by_artist(
        &self,
        token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        Ok(recommendations::by_artist(token, artist_id, limit).await?)
    }

    async fn artist_top_tracks(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<Vec<Track>, UpstreamError> {
        Ok(artists::get_top_tracks(token, artist_id).await?)
    }

    async fn artist_albums(
        &self,
        token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>, UpstreamError> {
        Ok(artists::get_albums(token, artist_id, limit).await?)
    }

    async fn album_tracks(
        &self,
        token: &str,
        album_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        Ok(artists::get_album_tracks(token, album_id, limit).await?)
    }

    async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, UpstreamError> {
        Ok(playlist::create(token, user_id, request).await?)
    }

    async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTracksResponse, UpstreamError> {
        Ok(playlist::add_tracks(token, playlist_id, uris).await?)
    }
}
