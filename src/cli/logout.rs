use crate::{error, management::SessionManager, store::FileStore, success};

/// Clears the stored credentials and any stray PKCE artifacts. Idempotent.
pub async fn logout() {
    let mut manager = match SessionManager::restore(FileStore::new()).await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load session: {}", e),
    };

    match manager.logout().await {
        Ok(()) => success!("Logged out."),
        Err(e) => error!("Failed to clear credentials: {}", e),
    }
}
