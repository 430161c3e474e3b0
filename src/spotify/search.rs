use reqwest::Client;

use crate::{
    config,
    types::{Artist, SearchArtistsResponse, SearchTracksResponse, Track},
};

/// Runs a keyword track search and returns up to `limit` tracks.
///
/// The query is sent verbatim; Spotify tokenizes it itself. An empty query
/// short-circuits to an empty result instead of hitting the API.
pub async fn search_tracks(
    token: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", &limit.to_string()),
        ])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchTracksResponse>().await?;
    Ok(res.tracks.items)
}

/// Resolves an artist name to the top search match.
///
/// Only the first result is considered; `None` means the catalog knows no
/// artist under that name.
pub async fn search_artist(token: &str, name: &str) -> Result<Option<Artist>, reqwest::Error> {
    if name.trim().is_empty() {
        return Ok(None);
    }

    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", name), ("type", "artist"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchArtistsResponse>().await?;
    Ok(res.artists.items.into_iter().next())
}
