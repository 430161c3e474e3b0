use reqwest::Client;

use crate::{config, types::UserProfile};

/// Retrieves the authenticated user's profile.
///
/// The user id is needed to create playlists; the display name is only
/// cosmetic.
pub async fn me(token: &str) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}
