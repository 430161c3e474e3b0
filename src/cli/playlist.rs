use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::{ResolutionEngine, SessionManager, publish},
    spotify::WebCatalog,
    store::FileStore,
    success,
    types::{Intent, IntentKind, TrackTableRow},
    warning,
};

/// Generates a playlist from an intent and reports its URL.
///
/// Loads the stored session (refreshing the access token when stale),
/// resolves the intent into a track list, prints a preview table, creates
/// the playlist, and fills it. A playlist that ends up with fewer tracks
/// than resolved is still a success; only resolution or creation failures
/// terminate the command.
pub async fn generate(kind: IntentKind, title: Option<String>, count: usize, open: bool) {
    let mut session = match SessionManager::restore(FileStore::new()).await {
        Ok(session) => session,
        Err(e) => error!("Failed to load session: {}", e),
    };

    let Some(token) = session.valid_token().await else {
        error!("Not logged in. Please run playgen auth first.");
    };

    let catalog = WebCatalog::new();
    if let Err(e) = session.ensure_profile(&catalog).await {
        error!("Failed to fetch user profile: {}", e);
    }
    let Some(user_id) = session.session().user_id.clone() else {
        error!("User profile has no id.");
    };

    let intent = Intent {
        kind,
        title,
        desired_count: count,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Resolving tracks for {}...", intent.kind.label()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let engine = ResolutionEngine::new(catalog);
    let tracks = match engine.resolve(&intent, &token).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };

    if tracks.len() < intent.desired_count {
        warning!(
            "Only {} of {} requested tracks could be resolved",
            tracks.len(),
            intent.desired_count
        );
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: t
                .artists
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();
    println!("{}", Table::new(table_rows));

    let name = playlist_name(&intent);
    info!("Creating playlist {}", name);

    let playlist = match publish(&catalog, &token, &user_id, &name, tracks).await {
        Ok(playlist) => playlist,
        Err(e) => error!("{}", e),
    };

    success!("Playlist {} created: {}", playlist.name, playlist.external_url);

    if open && webbrowser::open(&playlist.external_url).is_err() {
        warning!("Failed to open {} in the browser", playlist.external_url);
    }
}

fn playlist_name(intent: &Intent) -> String {
    match &intent.title {
        Some(title) if !title.trim().is_empty() => title.trim().to_string(),
        _ => format!("{} Mix", intent.kind.label()),
    }
}
