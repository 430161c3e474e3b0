use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    error, management::SessionManager, server::start_api_server, store::FileStore, success,
    types::CallbackParams, warning,
};

/// Runs the complete OAuth 2.0 PKCE authentication flow.
///
/// 1. **PKCE setup**: the session manager generates the state and code
///    verifier, persists them, and builds the authorization URL
/// 2. **Server start**: a local HTTP server is launched to catch the
///    OAuth redirect
/// 3. **Browser launch**: the authorization URL opens in the default
///    browser for the user to grant permissions
/// 4. **Callback**: the redirect parameters are captured by the server
///    and handed back to the session manager, which validates the state,
///    exchanges the code, and persists the tokens
///
/// Browser launch failures print the URL for manual navigation. A missing
/// or invalid callback terminates with an error message.
pub async fn auth() {
    let mut manager = SessionManager::new(FileStore::new());

    // Callback parameters land here once the redirect is hit.
    let shared_state: Arc<Mutex<Option<CallbackParams>>> = Arc::new(Mutex::new(None));
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let auth_url = match manager.begin_login().await {
        Ok(url) => url,
        Err(e) => error!("Failed to start the login flow: {}", e),
    };

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let Some(params) = wait_for_callback(shared_state).await else {
        error!("Authentication failed or timed out.");
    };

    match manager.complete_login(&params).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}

/// Polls the shared state for captured callback parameters.
///
/// Runs concurrently with the callback server; gives up after 60 seconds.
async fn wait_for_callback(
    shared_state: Arc<Mutex<Option<CallbackParams>>>,
) -> Option<CallbackParams> {
    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let mut lock = shared_state.lock().await;
        if let Some(params) = lock.take() {
            return Some(params);
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
