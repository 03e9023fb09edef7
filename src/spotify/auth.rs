use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use reqwest::{Url, header::AUTHORIZATION};
use tokio::sync::Mutex;

use crate::{
    config,
    error::AuthError,
    error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthState, Token, TokenResponse},
    warning,
};

/// Runs the complete OAuth 2.0 authorization-code flow with Spotify.
///
/// 1. Generates a random CSRF `state` parameter
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback handler to exchange the code
/// 5. Persists the obtained token for future use
///
/// Browser launch failures fall back to printing the URL for manual
/// navigation. A timed-out or failed flow terminates with an error
/// message; the user simply reruns `spindcli auth`.
pub async fn auth(shared_state: Arc<Mutex<Option<AuthState>>>) {
    let csrf_state = generate_state_param();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let auth_url = match build_authorize_url(
        &config::spotify_client_id(),
        &config::spotify_redirect_uri(),
        &config::spotify_scope(),
        &csrf_state,
    ) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization URL: {}", e),
    };

    // Store the state parameter before the redirect so the callback can
    // verify it round-tripped.
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthState {
            csrf_state,
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Constructs the provider's authorization endpoint URL.
///
/// Pure: embeds `response_type=code`, the client id, redirect URI, scope,
/// and CSRF state with proper query encoding. No side effects.
pub fn build_authorize_url(
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    state: &str,
) -> Result<String, AuthError> {
    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", scope),
            ("state", state),
            ("show_dialog", "true"),
        ],
    )
    .map_err(|e| AuthError::Config(e.to_string()))?;

    Ok(url.into())
}

/// Random alphanumeric `state` parameter binding the authorize redirect to
/// this flow.
fn generate_state_param() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state with a 180-second timeout while the callback
/// handler performs the code exchange concurrently. Returns `None` when
/// the timeout is reached without a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthState>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(180);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_state) = lock.as_ref() {
            if let Some(token) = &auth_state.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a token.
///
/// One-shot POST with `grant_type=authorization_code`, authenticated via
/// HTTP Basic `client_id:client_secret`. Never retried: authorization
/// codes are single-use and expire within minutes, so a failure means the
/// flow must be restarted, not the request repeated.
///
/// # Errors
///
/// [`AuthError::Exchange`] when the endpoint rejects the code (invalid,
/// expired, or already consumed) or the response lacks a refresh token;
/// [`AuthError::Http`] on transport failures.
pub async fn exchange_code(code: &str) -> Result<Token, AuthError> {
    let client = super::http_client();
    let response = client
        .post(config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_auth_header())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::Exchange(format!("{}: {}", status, body)));
    }

    let resp = response.json::<TokenResponse>().await?;
    let refresh_token = resp
        .refresh_token
        .ok_or_else(|| AuthError::Exchange("response carried no refresh_token".to_string()))?;

    Ok(Token {
        access_token: resp.access_token,
        refresh_token,
        scope: resp.scope.unwrap_or_else(config::spotify_scope),
        expires_in: resp.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may omit `refresh_token` and `scope` from the refresh response;
/// the previous values are retained then. On failure the caller must
/// discard the credential and restart the authorization flow — this
/// function performs no retries of its own.
///
/// # Errors
///
/// [`AuthError::Refresh`] when the endpoint rejects the refresh token;
/// [`AuthError::Http`] on transport failures.
pub async fn refresh(token: &Token) -> Result<Token, AuthError> {
    let client = super::http_client();
    let response = client
        .post(config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_auth_header())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &token.refresh_token),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AuthError::Refresh(format!("{}: {}", status, body)));
    }

    let resp = response.json::<TokenResponse>().await?;

    Ok(Token {
        access_token: resp.access_token,
        refresh_token: resp
            .refresh_token
            .unwrap_or_else(|| token.refresh_token.clone()),
        scope: resp.scope.unwrap_or_else(|| token.scope.clone()),
        expires_in: resp.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

fn basic_auth_header() -> String {
    let raw = format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(raw))
}
