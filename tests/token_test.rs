use std::path::PathBuf;

use spindcli::error::AuthError;
use spindcli::management::{TokenManager, TokenRefresher};
use spindcli::spotify::auth::build_authorize_url;
use spindcli::types::{EXPIRY_SKEW_SECS, Token};

// Helper function to create a token obtained at a fixed instant
fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_expires_at_is_derived() {
    let token = create_test_token(1_000_000, 3600);
    assert_eq!(token.expires_at(), 1_003_600);
}

#[test]
fn test_fresh_token_is_not_expired() {
    let token = create_test_token(1_000_000, 3600);
    assert!(!token.is_expired_at(1_000_000));
    assert!(!token.is_expired_at(1_000_000 + 1800));
}

#[test]
fn test_token_expired_at_and_after_expiry() {
    let token = create_test_token(1_000_000, 3600);
    assert!(token.is_expired_at(token.expires_at()));
    assert!(token.is_expired_at(token.expires_at() + 1));
    assert!(token.is_expired_at(token.expires_at() + 86_400));
}

#[test]
fn test_skew_margin_boundary() {
    let token = create_test_token(1_000_000, 3600);
    let margin_start = token.expires_at() - EXPIRY_SKEW_SECS;

    // one second before the margin the token is still usable
    assert!(!token.is_expired_at(margin_start - 1));
    // inside the margin it counts as expired and must be refreshed
    assert!(token.is_expired_at(margin_start));
    assert!(token.is_expired_at(margin_start + 1));
}

#[test]
fn test_zero_lifetime_token_is_always_expired() {
    let token = create_test_token(1_000_000, 0);
    assert!(token.is_expired_at(1_000_000));
}

#[test]
fn test_authorize_url_contains_required_parameters() {
    let url = build_authorize_url(
        "client123",
        "http://127.0.0.1:8888/callback",
        "playlist-read-private user-modify-playback-state",
        "stateXYZ",
    )
    .unwrap();

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=stateXYZ"));
    assert!(url.contains("show_dialog=true"));

    // query values are percent-encoded
    assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A8888%2Fcallback"));
    assert!(!url.contains("playlist-read-private user"));
}

/// Refresher that answers like the accounts service rejecting the grant.
struct RejectingRefresher;

impl TokenRefresher for RejectingRefresher {
    async fn refresh(&self, _token: &Token) -> Result<Token, AuthError> {
        Err(AuthError::Refresh(
            "400 Bad Request: invalid_grant".to_string(),
        ))
    }
}

/// Refresher that hands back the same grant with a rotated access token.
struct RotatingRefresher;

impl TokenRefresher for RotatingRefresher {
    async fn refresh(&self, token: &Token) -> Result<Token, AuthError> {
        let mut rotated = token.clone();
        rotated.access_token = "rotated".to_string();
        Ok(rotated)
    }
}

fn temp_cache_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "spindcli-test-{}-{}-token.json",
        name,
        std::process::id()
    ));
    path
}

#[tokio::test]
async fn test_failed_refresh_discards_cached_credential() {
    // long past its lifetime, so any use must go through a refresh
    let expired = create_test_token(1_000_000, 3600);
    let cache = temp_cache_path("failed-refresh");
    let mut manager = TokenManager::with_cache_path(expired, cache.clone());
    manager.persist().await.unwrap();
    assert!(cache.is_file());

    let result = manager.get_valid_token_with(&RejectingRefresher).await;

    assert!(matches!(result, Err(AuthError::Refresh(_))));
    // the cache is gone: the next invocation starts unauthenticated
    assert!(!cache.exists());
}

#[tokio::test]
async fn test_successful_refresh_rotates_and_repersists() {
    let expired = create_test_token(1_000_000, 3600);
    let cache = temp_cache_path("rotated-refresh");
    let mut manager = TokenManager::with_cache_path(expired, cache.clone());
    manager.persist().await.unwrap();

    let access = manager
        .get_valid_token_with(&RotatingRefresher)
        .await
        .unwrap();

    assert_eq!(access, "rotated");
    assert!(cache.is_file());

    let _ = std::fs::remove_file(&cache);
}

#[tokio::test]
async fn test_fresh_token_is_served_without_refreshing() {
    let now = chrono::Utc::now().timestamp() as u64;
    let fresh = create_test_token(now, 3600);
    let cache = temp_cache_path("fresh-token");
    let mut manager = TokenManager::with_cache_path(fresh, cache.clone());

    // the rejecting refresher would fail the call if it were consulted
    let access = manager
        .get_valid_token_with(&RejectingRefresher)
        .await
        .unwrap();

    assert_eq!(access, "access");
    let _ = std::fs::remove_file(&cache);
}

#[test]
fn test_authorize_url_is_deterministic() {
    let build = || {
        build_authorize_url(
            "client123",
            "http://127.0.0.1:8888/callback",
            "playlist-read-private",
            "stateXYZ",
        )
        .unwrap()
    };
    assert_eq!(build(), build());
}
