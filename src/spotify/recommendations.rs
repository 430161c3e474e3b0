use reqwest::Client;

use crate::{
    config,
    types::{RecommendationsResponse, Track},
};

/// Fetches recommendations seeded with up to five genres.
///
/// The endpoint rejects unknown seeds with a client error, so callers gate
/// genre seeds against the supported allow-list first.
pub async fn by_genres(
    token: &str,
    seed_genres: &[String],
    limit: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/recommendations?seed_genres={seeds}&limit={limit}",
        uri = &config::spotify_apiurl(),
        seeds = seed_genres.join(","),
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<RecommendationsResponse>().await?;
    Ok(res.tracks)
}

/// Fetches recommendations seeded with a single artist.
pub async fn by_artist(
    token: &str,
    artist_id: &str,
    limit: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/recommendations?seed_artists={artist_id}&limit={limit}",
        uri = &config::spotify_apiurl(),
        artist_id = artist_id,
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<RecommendationsResponse>().await?;
    Ok(res.tracks)
}
