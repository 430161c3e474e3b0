use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{config, error::AuthError, types::Token};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self.refresh_token.unwrap_or_default(),
            scope: self.scope.unwrap_or_default(),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Builds the authorization URL the browser is sent to.
///
/// Carries the PKCE parameters (`code_challenge`, `code_challenge_method=S256`)
/// and the CSRF `state` alongside the client id, scope, and redirect URI.
/// The browser applies its own percent-encoding on navigation.
pub fn authorize_url(state: &str, code_challenge: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        state = state,
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    )
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the OAuth 2.0 PKCE flow by exchanging the authorization code
/// received from the callback for an access token. The code verifier proves
/// that the same client that initiated the auth flow is completing it,
/// preventing authorization code interception attacks. The verifier is
/// transmitted here and nowhere else.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback
/// * `verifier` - PKCE code verifier generated at the start of the flow
///
/// # Errors
///
/// Returns [`AuthError::TokenExchange`] when the token endpoint answers with
/// a non-2xx status, and [`AuthError::Http`] for transport failures. The
/// authorization code is single-use and short-lived, so the exchange should
/// happen immediately after receiving the code.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, AuthError> {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", &redirect_uri),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(AuthError::TokenExchange(res.status().as_u16()));
    }

    let response = res.json::<TokenResponse>().await?;
    Ok(response.into_token())
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so the application can
/// maintain authenticated access without sending the user back through the
/// browser. Spotify may rotate the refresh token; when it does, the returned
/// token carries the new one, otherwise its `refresh_token` field is empty
/// and the caller keeps the old value.
///
/// # Errors
///
/// Returns [`AuthError::TokenExchange`] for a non-2xx response (an invalid
/// or revoked refresh token) and [`AuthError::Http`] for transport failures.
pub async fn refresh_access_token(refresh_token: &str) -> Result<Token, AuthError> {
    let client_id = config::spotify_client_id();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", &client_id),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(AuthError::TokenExchange(res.status().as_u16()));
    }

    let response = res.json::<TokenResponse>().await?;
    Ok(response.into_token())
}
