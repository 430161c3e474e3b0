use crate::{
    error::PublishError,
    spotify::Catalog,
    types::{CreatePlaylistRequest, Playlist, Track},
    utils, warning,
};

/// Upstream limit on the number of URIs per add-tracks call.
const MAX_TRACKS_PER_ADD: usize = 100;

const PLAYLIST_DESCRIPTION: &str = "Generated by playgen";

/// Creates a private playlist and fills it with the resolved tracks.
///
/// Creation is the only hard failure. Tracks are added in sequential
/// batches of at most 100; a failed batch is logged and skipped, so a
/// partially populated playlist still counts as success — the playlist
/// exists and its URL is returned.
pub async fn publish<C: Catalog>(
    catalog: &C,
    token: &str,
    user_id: &str,
    name: &str,
    mut tracks: Vec<Track>,
) -> Result<Playlist, PublishError> {
    utils::remove_duplicate_tracks(&mut tracks);

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: PLAYLIST_DESCRIPTION.to_string(),
        public: false,
        collaborative: false,
    };

    let created = catalog
        .create_playlist(token, user_id, &request)
        .await
        .map_err(|e| PublishError::Create(e.to_string()))?;

    let uris: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    for chunk in uris.chunks(MAX_TRACKS_PER_ADD) {
        if let Err(e) = catalog.add_tracks(token, &created.id, chunk).await {
            warning!("Failed to add a batch of {} tracks: {}", chunk.len(), e);
        }
    }

    Ok(Playlist {
        id: created.id,
        external_url: created.external_urls.spotify,
        name: created.name,
    })
}
