use std::path::PathBuf;

use chrono::Utc;

use crate::{error::AuthError, spotify, types::Token, warning};

/// Performs the refresh-token exchange on behalf of [`TokenManager`].
///
/// The seam between the token lifecycle and the accounts service:
/// production code goes over HTTP, tests script the outcome.
pub trait TokenRefresher {
    async fn refresh(&self, token: &Token) -> Result<Token, AuthError>;
}

/// [`TokenRefresher`] backed by the Spotify accounts service.
pub struct ApiTokenRefresher;

impl TokenRefresher for ApiTokenRefresher {
    async fn refresh(&self, token: &Token) -> Result<Token, AuthError> {
        spotify::auth::refresh(token).await
    }
}

/// Owns the session's credential: loads and persists it in the local data
/// directory and refreshes it transparently before use.
///
/// The credential leaves this manager only as a bare access token string.
/// When a refresh fails the cached credential is discarded and the caller
/// is pushed back into the unauthenticated state; a stale access token is
/// never handed out.
pub struct TokenManager {
    token: Token,
    cache_path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager {
            token,
            cache_path: Self::token_path(),
        }
    }

    /// Manager with a custom cache location instead of the data directory.
    pub fn with_cache_path(token: Token, cache_path: PathBuf) -> Self {
        TokenManager { token, cache_path }
    }

    /// Loads the persisted credential from the cache file.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when no readable, parseable token
    /// cache exists. Resolved by running `spindcli auth`.
    pub async fn load() -> Result<Self, AuthError> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| AuthError::NotAuthenticated(e.to_string()))?;
        let token: Token = serde_json::from_str(&content)
            .map_err(|e| AuthError::NotAuthenticated(e.to_string()))?;
        Ok(Self {
            token,
            cache_path: path,
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.cache_path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.cache_path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token that is valid right now, refreshing through
    /// the accounts service when needed.
    pub async fn get_valid_token(&mut self) -> Result<String, AuthError> {
        self.get_valid_token_with(&ApiTokenRefresher).await
    }

    /// Returns an access token that is valid right now.
    ///
    /// Refreshes through `refresher` first when the stored token is within
    /// the expiry margin. On refresh failure the cached credential is
    /// removed before the error surfaces; the user must re-authorize.
    pub async fn get_valid_token_with<R: TokenRefresher>(
        &mut self,
        refresher: &R,
    ) -> Result<String, AuthError> {
        let now = Utc::now().timestamp() as u64;
        if self.token.is_expired_at(now) {
            match refresher.refresh(&self.token).await {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warning!("Failed to persist refreshed token: {}", e);
                    }
                }
                Err(e) => {
                    self.invalidate().await;
                    return Err(e);
                }
            }
        }

        Ok(self.token.access_token.clone())
    }

    /// Removes the cached credential. Missing files are fine; the goal is
    /// that the next invocation starts unauthenticated.
    pub async fn invalidate(&self) {
        let _ = async_fs::remove_file(&self.cache_path).await;
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spindcli/cache/token.json");
        path
    }
}
