use std::sync::Once;

use playgen::error::AuthError;
use playgen::management::{SessionManager, SessionState};
use playgen::store::{
    CredentialStore, KEY_ACCESS_TOKEN, KEY_PKCE_CODE_VERIFIER, KEY_PKCE_STATE, KEY_REFRESH_TOKEN,
    MemoryStore,
};
use playgen::types::CallbackParams;

// begin_login builds the authorization URL from configuration, so the tests
// pin the relevant environment once for the whole binary.
fn init_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| unsafe {
        std::env::set_var("SPOTIFY_API_AUTH_URL", "https://accounts.example.com/authorize");
        std::env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "client-id-under-test");
        std::env::set_var("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8080/callback");
        std::env::set_var("SPOTIFY_API_AUTH_SCOPE", "playlist-modify-private");
    });
}

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_string),
        state: state.map(str::to_string),
        error: error.map(str::to_string),
    }
}

#[tokio::test]
async fn begin_login_persists_the_challenge_and_builds_the_url() {
    init_env();

    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store.clone());

    let url = manager.begin_login().await.unwrap();

    assert_eq!(manager.state(), SessionState::AuthPending);

    let state = store.get(KEY_PKCE_STATE).await.unwrap().unwrap();
    let verifier = store.get(KEY_PKCE_CODE_VERIFIER).await.unwrap().unwrap();
    assert_eq!(state.len(), 16);
    assert_eq!(verifier.len(), 128);

    assert!(url.starts_with("https://accounts.example.com/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("code_challenge_method=S256"));
    assert!(url.contains(&format!("state={}", state)));
    // The verifier itself must never appear in the authorization request
    assert!(!url.contains(&verifier));
}

#[tokio::test]
async fn a_second_login_attempt_overwrites_the_first_challenge() {
    init_env();

    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store.clone());

    manager.begin_login().await.unwrap();
    let first_state = store.get(KEY_PKCE_STATE).await.unwrap().unwrap();

    manager.begin_login().await.unwrap();
    let second_state = store.get(KEY_PKCE_STATE).await.unwrap().unwrap();

    assert_ne!(first_state, second_state);
}

#[tokio::test]
async fn callback_with_provider_error_is_rejected() {
    init_env();

    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store.clone());
    manager.begin_login().await.unwrap();

    let err = manager
        .complete_login(&params(Some("code"), Some("whatever"), Some("access_denied")))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Provider(reason) if reason == "access_denied"));
    assert!(manager.access_token().is_none());

    // The challenge is discarded either way
    assert!(store.get(KEY_PKCE_STATE).await.unwrap().is_none());
    assert!(store.get(KEY_PKCE_CODE_VERIFIER).await.unwrap().is_none());
}

#[tokio::test]
async fn callback_without_code_is_rejected() {
    init_env();

    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store.clone());
    manager.begin_login().await.unwrap();

    let err = manager
        .complete_login(&params(None, Some("whatever"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::MissingCode));
    assert!(manager.access_token().is_none());
    assert!(store.get(KEY_PKCE_STATE).await.unwrap().is_none());
}

#[tokio::test]
async fn callback_with_mismatched_state_is_rejected_even_with_a_valid_code() {
    init_env();

    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store.clone());
    manager.begin_login().await.unwrap();

    let err = manager
        .complete_login(&params(Some("valid-code"), Some("forged-state"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::StateMismatch));
    assert!(manager.access_token().is_none());
    assert_eq!(manager.state(), SessionState::LoggedOut);

    // Both halves of the challenge are gone; the code cannot be replayed
    assert!(store.get(KEY_PKCE_STATE).await.unwrap().is_none());
    assert!(store.get(KEY_PKCE_CODE_VERIFIER).await.unwrap().is_none());
}

#[tokio::test]
async fn callback_without_a_pending_challenge_is_rejected() {
    let store = MemoryStore::new();
    let mut manager = SessionManager::new(store);

    let err = manager
        .complete_login(&params(Some("code"), Some("state"), None))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::NoPendingLogin));
}

#[tokio::test]
async fn refresh_without_a_refresh_token_is_a_noop() {
    let store = MemoryStore::new();
    store.set(KEY_ACCESS_TOKEN, "stale-token").await.unwrap();

    let mut manager = SessionManager::restore(store).await.unwrap();
    assert_eq!(manager.state(), SessionState::LoggedIn);

    assert!(manager.refresh().await.is_none());
    assert_eq!(manager.state(), SessionState::LoggedIn);
    assert_eq!(manager.access_token(), Some("stale-token"));
}

#[tokio::test]
async fn restore_without_stored_tokens_is_logged_out() {
    let manager = SessionManager::restore(MemoryStore::new()).await.unwrap();

    assert_eq!(manager.state(), SessionState::LoggedOut);
    assert!(manager.access_token().is_none());
}

#[tokio::test]
async fn logout_clears_every_stored_key() {
    let store = MemoryStore::new();
    store.set(KEY_ACCESS_TOKEN, "token").await.unwrap();
    store.set(KEY_REFRESH_TOKEN, "refresh").await.unwrap();
    store.set(KEY_PKCE_STATE, "state").await.unwrap();
    store.set(KEY_PKCE_CODE_VERIFIER, "verifier").await.unwrap();

    let mut manager = SessionManager::restore(store.clone()).await.unwrap();
    assert_eq!(manager.state(), SessionState::LoggedIn);

    manager.logout().await.unwrap();

    assert_eq!(manager.state(), SessionState::LoggedOut);
    assert!(store.get(KEY_ACCESS_TOKEN).await.unwrap().is_none());
    assert!(store.get(KEY_REFRESH_TOKEN).await.unwrap().is_none());
    assert!(store.get(KEY_PKCE_STATE).await.unwrap().is_none());
    assert!(store.get(KEY_PKCE_CODE_VERIFIER).await.unwrap().is_none());

    // With no tokens left, a token request fails locally, before any
    // network access could happen
    assert!(manager.valid_token().await.is_none());

    // Logout is idempotent
    manager.logout().await.unwrap();
    assert_eq!(manager.state(), SessionState::LoggedOut);
}
