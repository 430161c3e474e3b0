use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric, seq::SliceRandom};
use sha2::{Digest, Sha256};

use crate::types::Track;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Curated mood to search-keyword table. Moods missing from the table fall
/// back to the mood string itself.
static MOOD_KEYWORDS: &[(&str, &str)] = &[
    ("chill", "chill acoustic ambient"),
    ("workout", "energetic workout upbeat"),
    ("party", "party dance pop"),
    ("focus", "focus instrumental study"),
    ("romantic", "romantic love songs"),
    ("sad", "sad acoustic melancholy"),
    ("happy", "happy feel good"),
    ("sleep", "sleep ambient calm"),
    ("study", "study classical instrumental"),
    ("meditation", "meditation ambient drone"),
    ("road trip", "road-trip rock singalong"),
    ("rainy day", "rainy day jazz"),
    ("gaming", "gaming electronic bass"),
    ("lofi", "lo-fi chill beats"),
    ("motivational", "motivational power anthem"),
];

/// Seed genres the recommendation endpoint accepts. Unknown seeds are
/// rejected upstream, so anything not listed here goes through keyword
/// search instead.
static SEED_GENRES: &[&str] = &[
    "acoustic",
    "ambient",
    "blues",
    "chill",
    "classical",
    "club",
    "country",
    "dance",
    "disco",
    "edm",
    "electronic",
    "folk",
    "funk",
    "hip-hop",
    "house",
    "indie",
    "jazz",
    "k-pop",
    "latin",
    "metal",
    "pop",
    "punk",
    "r-n-b",
    "reggae",
    "rock",
    "soul",
    "techno",
    "trance",
];

pub fn mood_keywords(mood: &str) -> &str {
    let needle = mood.trim().to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .find(|(m, _)| *m == needle)
        .map(|(_, kw)| *kw)
        .unwrap_or(mood)
}

pub fn normalize_genre(genre: &str) -> String {
    genre.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

pub fn is_seed_genre(genre: &str) -> bool {
    SEED_GENRES.contains(&genre)
}

pub fn clamp_desired_count(count: usize) -> usize {
    count.clamp(1, 50)
}

pub fn remove_duplicate_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

pub fn shuffle_tracks(tracks: &mut [Track]) {
    tracks.shuffle(&mut rand::rng());
}
