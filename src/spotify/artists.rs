use reqwest::Client;

use crate::{
    config,
    types::{AlbumSummary, AlbumTracksResponse, ArtistAlbumsResponse, TopTracksResponse, Track},
};

/// Retrieves an artist's most popular tracks.
///
/// Uses Spotify's `/artists/{id}/top-tracks` endpoint, which requires a
/// market parameter (taken from configuration) and returns at most ten
/// tracks.
pub async fn get_top_tracks(token: &str, artist_id: &str) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = &config::spotify_market()
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;
    Ok(res.tracks)
}

/// Retrieves an artist's albums and singles.
///
/// Uses Spotify's `/artists/{id}/albums` endpoint with the following
/// parameters:
/// - `include_groups` - restricted to `album,single` (no compilations or
///   appears-on entries, which dilute artist-mode pools with other artists'
///   material)
/// - `limit` - number of results to return (1-50)
pub async fn get_albums(
    token: &str,
    artist_id: &str,
    limit: usize,
) -> Result<Vec<AlbumSummary>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/albums?include_groups=album,single&limit={limit}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<ArtistAlbumsResponse>().await?;
    Ok(res.items)
}

/// Retrieves the track listing of a single album.
pub async fn get_album_tracks(
    token: &str,
    album_id: &str,
    limit: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/albums/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = album_id,
        limit = limit
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<AlbumTracksResponse>().await?;
    Ok(res.items)
}
