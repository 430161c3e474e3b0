use crate::{
    error::{ResolutionError, UpstreamError},
    spotify::Catalog,
    types::{Intent, IntentKind, Track},
    utils, warning,
};

/// How many of the artist's albums feed the artist-mode candidate pool.
const MAX_POOL_ALBUMS: usize = 10;
/// Track-listing page size per album.
const ALBUM_TRACKS_LIMIT: usize = 50;

/// Turns a user intent into a bounded, deduplicated, ordered track list.
///
/// Each intent kind composes a primary query strategy with a fallback;
/// individual upstream failures count as empty results, and only an intent
/// that yields nothing everywhere is an error. Mood and genre results keep
/// primary-strategy hits ahead of fallback hits; artist mode shuffles its
/// pooled candidates to favor discovery breadth over popularity order.
pub struct ResolutionEngine<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> ResolutionEngine<C> {
    pub fn new(catalog: C) -> Self {
        ResolutionEngine { catalog }
    }

    pub async fn resolve(
        &self,
        intent: &Intent,
        token: &str,
    ) -> Result<Vec<Track>, ResolutionError> {
        let desired = utils::clamp_desired_count(intent.desired_count);

        let mut tracks = match &intent.kind {
            IntentKind::Mood(mood) => self.resolve_mood(mood, desired, token).await,
            IntentKind::Genre(genre) => self.resolve_genre(genre, desired, token).await,
            IntentKind::Artist(name) => self.resolve_artist(name, desired, token).await?,
        };

        utils::remove_duplicate_tracks(&mut tracks);
        tracks.truncate(desired);

        if tracks.is_empty() {
            return Err(ResolutionError::NoTracks(intent.kind.label().to_string()));
        }

        Ok(tracks)
    }

    /// Mood: curated keyword search, topped up with a genre-seeded
    /// recommendation query built from the first two keyword tokens.
    async fn resolve_mood(&self, mood: &str, desired: usize, token: &str) -> Vec<Track> {
        let keywords = utils::mood_keywords(mood);

        let mut tracks = absorb(
            "mood search",
            self.catalog.search_tracks(token, keywords, desired).await,
        );
        utils::remove_duplicate_tracks(&mut tracks);
        tracks.truncate(desired);

        if tracks.len() < desired {
            let seeds: Vec<String> = keywords
                .split_whitespace()
                .take(2)
                .map(str::to_string)
                .collect();
            let remainder = desired - tracks.len();
            let mut extra = absorb(
                "mood recommendations",
                self.catalog
                    .recommend_by_genres(token, &seeds, remainder)
                    .await,
            );
            tracks.append(&mut extra);
        }

        tracks
    }

    /// Genre: seeded recommendations when the normalized genre is a known
    /// seed, keyword search otherwise; padded with a generic pop query.
    async fn resolve_genre(&self, genre: &str, desired: usize, token: &str) -> Vec<Track> {
        let normalized = utils::normalize_genre(genre);

        let mut tracks = if utils::is_seed_genre(&normalized) {
            absorb(
                "genre recommendations",
                self.catalog
                    .recommend_by_genres(token, std::slice::from_ref(&normalized), desired)
                    .await,
            )
        } else {
            // The recommendation endpoint rejects unknown seeds outright.
            absorb(
                "genre search",
                self.catalog.search_tracks(token, genre, desired).await,
            )
        };
        utils::remove_duplicate_tracks(&mut tracks);
        tracks.truncate(desired);

        if tracks.len() < desired {
            let remainder = desired - tracks.len();
            let mut extra = absorb(
                "genre fallback recommendations",
                self.catalog
                    .recommend_by_genres(token, &["pop".to_string()], remainder)
                    .await,
            );
            tracks.append(&mut extra);
        }

        tracks
    }

    /// Artist: top-match lookup, then a shuffled union of top tracks, album
    /// tracks, and seed-artist recommendations.
    ///
    /// The three pool queries run concurrently and fail independently; only
    /// the name lookup is a hard failure.
    async fn resolve_artist(
        &self,
        name: &str,
        desired: usize,
        token: &str,
    ) -> Result<Vec<Track>, ResolutionError> {
        let artist = match self.catalog.search_artist(token, name).await {
            Ok(Some(artist)) => artist,
            Ok(None) | Err(_) => {
                return Err(ResolutionError::ArtistNotFound(name.to_string()));
            }
        };

        let top_tracks = async {
            absorb(
                "top tracks",
                self.catalog.artist_top_tracks(token, &artist.id).await,
            )
        };

        let album_tracks = async {
            let albums = absorb(
                "artist albums",
                self.catalog
                    .artist_albums(token, &artist.id, MAX_POOL_ALBUMS)
                    .await,
            );
            let mut pool = Vec::new();
            for album in albums {
                let mut tracks = absorb(
                    "album tracks",
                    self.catalog
                        .album_tracks(token, &album.id, ALBUM_TRACKS_LIMIT)
                        .await,
                );
                pool.append(&mut tracks);
            }
            pool
        };

        let recommended = async {
            absorb(
                "artist recommendations",
                self.catalog
                    .recommend_by_artist(token, &artist.id, desired)
                    .await,
            )
        };

        let (top_tracks, album_tracks, recommended) =
            tokio::join!(top_tracks, album_tracks, recommended);

        let mut pool = top_tracks;
        pool.extend(album_tracks);
        pool.extend(recommended);

        utils::remove_duplicate_tracks(&mut pool);
        utils::shuffle_tracks(&mut pool);
        Ok(pool)
    }
}

fn absorb<T>(label: &str, result: Result<Vec<T>, UpstreamError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warning!("{} query failed, continuing without it: {}", label, e);
            Vec::new()
        }
    }
}
