#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use playgen::error::UpstreamError;
use playgen::spotify::Catalog;
use playgen::types::{
    AddTracksResponse, AlbumSummary, Artist, CreatePlaylistRequest, CreatePlaylistResponse,
    ExternalUrls, Track, UserProfile,
};

pub fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: Vec::new(),
    }
}

pub fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Me,
    SearchTracks { query: String, limit: usize },
    SearchArtist { name: String },
    RecommendGenres { seeds: Vec<String>, limit: usize },
    RecommendArtist { artist_id: String, limit: usize },
    TopTracks { artist_id: String },
    Albums { artist_id: String, limit: usize },
    AlbumTracks { album_id: String },
    CreatePlaylist { name: String },
    AddTracks { count: usize },
}

/// Canned-response catalog. Every call is recorded; clones share the call
/// log, so tests can keep a handle after moving the fake into an engine.
#[derive(Clone, Default)]
pub struct FakeCatalog {
    pub profile: Option<UserProfile>,
    pub search_tracks_result: Vec<Track>,
    pub search_tracks_fail: bool,
    pub artist: Option<Artist>,
    pub search_artist_fail: bool,
    /// Keyed by `seeds.join(",")`; missing keys come back empty.
    pub rec_by_seed: HashMap<String, Vec<Track>>,
    pub rec_genres_fail: bool,
    pub rec_artist_tracks: Vec<Track>,
    pub rec_artist_fail: bool,
    pub top_tracks: Vec<Track>,
    pub top_tracks_fail: bool,
    pub albums: Vec<AlbumSummary>,
    pub albums_fail: bool,
    pub album_tracks: HashMap<String, Vec<Track>>,
    pub create_fail: bool,
    pub add_fail: bool,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeCatalog {
    pub fn with_artist(id: &str, name: &str) -> Self {
        FakeCatalog {
            artist: Some(Artist {
                id: id.to_string(),
                name: name.to_string(),
            }),
            ..FakeCatalog::default()
        }
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail<T>(&self) -> Result<T, UpstreamError> {
        Err(UpstreamError("fake upstream failure".to_string()))
    }
}

impl Catalog for FakeCatalog {
    async fn me(&self, _token: &str) -> Result<UserProfile, UpstreamError> {
        self.record(Call::Me);
        self.profile
            .clone()
            .ok_or_else(|| UpstreamError("fake upstream failure".to_string()))
    }

    async fn search_tracks(
        &self,
        _token: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        self.record(Call::SearchTracks {
            query: query.to_string(),
            limit,
        });
        if self.search_tracks_fail {
            return self.fail();
        }
        Ok(self.search_tracks_result.clone())
    }

    async fn search_artist(
        &self,
        _token: &str,
        name: &str,
    ) -> Result<Option<Artist>, UpstreamError> {
        self.record(Call::SearchArtist {
            name: name.to_string(),
        });
        if self.search_artist_fail {
            return self.fail();
        }
        Ok(self.artist.clone())
    }

    async fn recommend_by_genres(
        &self,
        _token: &str,
        seed_genres: &[String],
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        self.record(Call::RecommendGenres {
            seeds: seed_genres.to_vec(),
            limit,
        });
        if self.rec_genres_fail {
            return self.fail();
        }
        Ok(self
            .rec_by_seed
            .get(&seed_genres.join(","))
            .cloned()
            .unwrap_or_default())
    }

    async fn recommend_by_artist(
        &self,
        _token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        self.record(Call::RecommendArtist {
            artist_id: artist_id.to_string(),
            limit,
        });
        if self.rec_artist_fail {
            return self.fail();
        }
        Ok(self.rec_artist_tracks.clone())
    }

    async fn artist_top_tracks(
        &self,
        _token: &str,
        artist_id: &str,
    ) -> Result<Vec<Track>, UpstreamError> {
        self.record(Call::TopTracks {
            artist_id: artist_id.to_string(),
        });
        if self.top_tracks_fail {
            return self.fail();
        }
        Ok(self.top_tracks.clone())
    }

    async fn artist_albums(
        &self,
        _token: &str,
        artist_id: &str,
        limit: usize,
    ) -> Result<Vec<AlbumSummary>, UpstreamError> {
        self.record(Call::Albums {
            artist_id: artist_id.to_string(),
            limit,
        });
        if self.albums_fail {
            return self.fail();
        }
        Ok(self.albums.clone())
    }

    async fn album_tracks(
        &self,
        _token: &str,
        album_id: &str,
        _limit: usize,
    ) -> Result<Vec<Track>, UpstreamError> {
        self.record(Call::AlbumTracks {
            album_id: album_id.to_string(),
        });
        Ok(self.album_tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn create_playlist(
        &self,
        _token: &str,
        _user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse, UpstreamError> {
        self.record(Call::CreatePlaylist {
            name: request.name.clone(),
        });
        if self.create_fail {
            return self.fail();
        }
        Ok(CreatePlaylistResponse {
            id: "playlist-1".to_string(),
            name: request.name.clone(),
            external_urls: ExternalUrls {
                spotify: "https://open.spotify.com/playlist/playlist-1".to_string(),
            },
        })
    }

    async fn add_tracks(
        &self,
        _token: &str,
        _playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTracksResponse, UpstreamError> {
        self.record(Call::AddTracks { count: uris.len() });
        if self.add_fail {
            return self.fail();
        }
        Ok(AddTracksResponse {
            snapshot_id: "snapshot-1".to_string(),
        })
    }
}
