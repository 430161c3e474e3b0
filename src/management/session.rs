use chrono::Utc;

use crate::{
    error::{AuthError, StoreError, UpstreamError},
    spotify::{self, Catalog},
    store::{
        CredentialStore, KEY_ACCESS_TOKEN, KEY_PKCE_CODE_VERIFIER, KEY_PKCE_STATE,
        KEY_REFRESH_TOKEN,
    },
    types::CallbackParams,
    utils,
};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_BUFFER_SECS: u64 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    AuthPending,
    LoggedIn,
    Refreshing,
}

/// The authenticated session, exposed read-only outside the manager.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

/// Drives the PKCE authorization-code flow and the token lifecycle.
///
/// Owns the [`Session`] and the one-shot PKCE challenge. All durable state
/// lives in the injected [`CredentialStore`] under four keys: the two tokens
/// and the transient `pkce_state`/`pkce_code_verifier` pair. The browser
/// redirect splits the flow in two: `begin_login` persists the challenge and
/// hands back the authorization URL, `complete_login` re-hydrates the
/// challenge from the store and consumes it.
pub struct SessionManager<S: CredentialStore> {
    store: S,
    session: Session,
    state: SessionState,
    expires_in: u64,
    obtained_at: u64,
}

impl<S: CredentialStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        SessionManager {
            store,
            session: Session::default(),
            state: SessionState::LoggedOut,
            expires_in: 0,
            obtained_at: 0,
        }
    }

    /// Re-hydrates a session from the credential store.
    ///
    /// A restored session has unknown expiry, so the first `valid_token`
    /// call triggers one best-effort refresh.
    pub async fn restore(store: S) -> Result<Self, StoreError> {
        let access_token = store.get(KEY_ACCESS_TOKEN).await?;
        let refresh_token = store.get(KEY_REFRESH_TOKEN).await?;

        let state = if access_token.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        };

        Ok(SessionManager {
            store,
            session: Session {
                access_token,
                refresh_token,
                user_id: None,
                display_name: None,
            },
            state,
            expires_in: 0,
            obtained_at: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token.as_deref()
    }

    /// Starts a login attempt.
    ///
    /// Generates the CSRF `state` and PKCE code verifier, persists both to
    /// the store (overwriting any prior, now unresolvable, challenge), and
    /// returns the authorization URL for the caller to open in a browser.
    pub async fn begin_login(&mut self) -> Result<String, AuthError> {
        let state = utils::generate_state();
        let verifier = utils::generate_code_verifier();
        let challenge = utils::generate_code_challenge(&verifier);

        self.store.set(KEY_PKCE_STATE, &state).await?;
        self.store.set(KEY_PKCE_CODE_VERIFIER, &verifier).await?;

        self.state = SessionState::AuthPending;
        Ok(spotify::auth::authorize_url(&state, &challenge))
    }

    /// Consumes the one-shot challenge and exchanges the code for tokens.
    ///
    /// Rejects the callback when the provider reported an error, when no
    /// code is present, or when the returned `state` differs from the stored
    /// one (strict string comparison). Every exit, success or failure,
    /// discards the stored challenge; the Session is only mutated on
    /// success.
    pub async fn complete_login(&mut self, params: &CallbackParams) -> Result<String, AuthError> {
        if let Some(err) = &params.error {
            self.discard_challenge().await;
            return Err(AuthError::Provider(err.clone()));
        }

        let Some(code) = &params.code else {
            self.discard_challenge().await;
            return Err(AuthError::MissingCode);
        };

        let Some(expected_state) = self.store.get(KEY_PKCE_STATE).await? else {
            self.discard_challenge().await;
            return Err(AuthError::NoPendingLogin);
        };

        if params.state.as_deref() != Some(expected_state.as_str()) {
            self.discard_challenge().await;
            return Err(AuthError::StateMismatch);
        }

        let Some(verifier) = self.store.get(KEY_PKCE_CODE_VERIFIER).await? else {
            self.discard_challenge().await;
            return Err(AuthError::NoPendingLogin);
        };

        // The code and verifier are single-use: gone even if the exchange fails.
        let exchange = spotify::auth::exchange_code_pkce(code, &verifier).await;
        self.discard_challenge().await;
        let token = exchange?;

        self.store.set(KEY_ACCESS_TOKEN, &token.access_token).await?;
        if !token.refresh_token.is_empty() {
            self.store
                .set(KEY_REFRESH_TOKEN, &token.refresh_token)
                .await?;
        }

        self.session.access_token = Some(token.access_token.clone());
        self.session.refresh_token = if token.refresh_token.is_empty() {
            None
        } else {
            Some(token.refresh_token)
        };
        self.expires_in = token.expires_in;
        self.obtained_at = token.obtained_at;
        self.state = SessionState::LoggedIn;

        Ok(token.access_token)
    }

    /// Exchanges the refresh token for a fresh access token.
    ///
    /// Returns `None` without any state change when no refresh token is
    /// stored or when the exchange fails; the caller decides whether a
    /// failed refresh should force a logout.
    pub async fn refresh(&mut self) -> Option<String> {
        let refresh_token = self.session.refresh_token.clone()?;

        let previous = self.state;
        self.state = SessionState::Refreshing;

        let token = match spotify::auth::refresh_access_token(&refresh_token).await {
            Ok(token) => token,
            Err(_) => {
                self.state = previous;
                return None;
            }
        };

        let _ = self.store.set(KEY_ACCESS_TOKEN, &token.access_token).await;
        if !token.refresh_token.is_empty() {
            let _ = self
                .store
                .set(KEY_REFRESH_TOKEN, &token.refresh_token)
                .await;
            self.session.refresh_token = Some(token.refresh_token);
        }

        self.session.access_token = Some(token.access_token.clone());
        self.expires_in = token.expires_in;
        self.obtained_at = token.obtained_at;
        self.state = SessionState::LoggedIn;

        Some(token.access_token)
    }

    /// Returns an access token fit for immediate use, refreshing first when
    /// the current one is stale or of unknown age.
    pub async fn valid_token(&mut self) -> Option<String> {
        self.session.access_token.as_ref()?;

        if self.is_expired() {
            if let Some(token) = self.refresh().await {
                return Some(token);
            }
        }

        self.session.access_token.clone()
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_BUFFER_SECS >= self.obtained_at + self.expires_in
    }

    /// Populates `user_id`/`display_name` from the profile endpoint on
    /// first need.
    pub async fn ensure_profile<C: Catalog>(&mut self, catalog: &C) -> Result<(), UpstreamError> {
        if self.session.user_id.is_some() {
            return Ok(());
        }

        let token = self.session.access_token.clone().unwrap_or_default();
        let profile = catalog.me(&token).await?;
        self.session.user_id = Some(profile.id);
        self.session.display_name = profile.display_name;
        Ok(())
    }

    /// Clears the session and every credential store entry. Idempotent.
    pub async fn logout(&mut self) -> Result<(), StoreError> {
        self.store.remove(KEY_ACCESS_TOKEN).await?;
        self.store.remove(KEY_REFRESH_TOKEN).await?;
        self.store.remove(KEY_PKCE_STATE).await?;
        self.store.remove(KEY_PKCE_CODE_VERIFIER).await?;

        self.session = Session::default();
        self.expires_in = 0;
        self.obtained_at = 0;
        self.state = SessionState::LoggedOut;
        Ok(())
    }

    async fn discard_challenge(&mut self) {
        let _ = self.store.remove(KEY_PKCE_STATE).await;
        let _ = self.store.remove(KEY_PKCE_CODE_VERIFIER).await;
        if self.state == SessionState::AuthPending {
            self.state = if self.session.access_token.is_some() {
                SessionState::LoggedIn
            } else {
                SessionState::LoggedOut
            };
        }
    }
}
