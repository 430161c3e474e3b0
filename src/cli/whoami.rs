use crate::{
    error, info, management::SessionManager, spotify::WebCatalog, store::FileStore,
};

/// Shows the authenticated user's profile.
pub async fn whoami() {
    let mut manager = match SessionManager::restore(FileStore::new()).await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load session: {}", e),
    };

    if manager.valid_token().await.is_none() {
        error!("Not logged in. Please run playgen auth first.");
    }

    let catalog = WebCatalog::new();
    if let Err(e) = manager.ensure_profile(&catalog).await {
        error!("Failed to fetch profile: {}", e);
    }

    let session = manager.session();
    let user_id = session.user_id.as_deref().unwrap_or("unknown");
    match &session.display_name {
        Some(name) => info!("Logged in as {} ({})", name, user_id),
        None => info!("Logged in as {}", user_id),
    }
}
