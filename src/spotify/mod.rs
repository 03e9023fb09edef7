//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API: the OAuth 2.0 authorization-code flow,
//! paginated collection retrieval, and playback control. It handles all HTTP
//! communication and maps wire payloads onto the typed structs in
//! [`crate::types`].
//!
//! ## Core Modules
//!
//! - [`auth`] - Authorization-code flow: authorize-URL construction, code
//!   exchange, and token refresh against the accounts service.
//! - [`playlists`] - The user's playlists and a playlist's tracks, drained
//!   through cursor pagination.
//! - [`player`] - Device listing and remote playback start.
//!
//! ## Pagination
//!
//! Every list endpoint answers one bounded [`Page`] at a time, each carrying
//! an absolute `next` URL until the collection is exhausted. [`fetch_all`]
//! walks that chain through a [`PageSource`], concatenating items in server
//! order. The HTTP-backed source ([`ApiPageSource`]) is the production
//! implementation; tests drive the same walker with scripted pages.
//!
//! A failed page aborts the whole walk: the partial result is discarded and
//! a [`FetchError`] surfaces to the caller, which warns and renders nothing.
//!
//! ## Network posture
//!
//! Requests carry a 10 second timeout. Page fetches retry at most twice on
//! 429 (honoring `Retry-After`, capped at 60 seconds) and 502; the token
//! endpoints are never retried because authorization codes are single-use.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{error::FetchError, types::Page};

pub mod auth;
pub mod player;
pub mod playlists;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_PAGE_RETRIES: u32 = 2;
const MAX_RETRY_AFTER_SECS: u64 = 60;

/// HTTP client with the crate-wide request timeout applied.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// One producer of collection pages, addressed by cursor URL.
///
/// The seam between the page-walking logic and the transport: production
/// code fetches over HTTP, tests script the page sequence in memory.
pub trait PageSource<T> {
    async fn fetch(&mut self, url: &str) -> Result<Page<T>, FetchError>;
}

/// Drains a paginated collection starting at `first_url`.
///
/// Follows each page's `next` cursor until absent, concatenating items in
/// server-returned order without deduplication. A page with zero items but
/// a further cursor does not terminate the walk. Any page failure aborts
/// the whole fetch; nothing fetched so far is returned.
pub async fn fetch_all<T, S: PageSource<T>>(
    source: &mut S,
    first_url: String,
) -> Result<Vec<T>, FetchError> {
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(first_url);

    while let Some(url) = next {
        let page = source.fetch(&url).await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}

/// [`PageSource`] backed by the Spotify Web API with bearer authentication.
pub struct ApiPageSource<'a> {
    client: &'a Client,
    token: &'a str,
}

impl<'a> ApiPageSource<'a> {
    pub fn new(client: &'a Client, token: &'a str) -> Self {
        Self { client, token }
    }
}

impl<T: DeserializeOwned> PageSource<T> for ApiPageSource<'_> {
    async fn fetch(&mut self, url: &str) -> Result<Page<T>, FetchError> {
        let mut attempts = 0u32;

        loop {
            let response = self.client.get(url).bearer_auth(self.token).send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::BAD_GATEWAY {
                if attempts >= MAX_PAGE_RETRIES {
                    return Err(FetchError::Api(format!(
                        "giving up after {} retries, last status {}",
                        attempts, status
                    )));
                }
                attempts += 1;
                let delay = retry_delay_secs(
                    response.headers().get("retry-after").and_then(|v| v.to_str().ok()),
                );
                sleep(Duration::from_secs(delay)).await;
                continue;
            }

            let response = response.error_for_status()?;
            return Ok(response.json::<Page<T>>().await?);
        }
    }
}

/// Delay before retrying a page: the server's `Retry-After` when parseable,
/// clamped to 60 seconds, 10 seconds otherwise.
pub fn retry_delay_secs(retry_after: Option<&str>) -> u64 {
    retry_after
        .and_then(|v| v.parse::<u64>().ok())
        .map(|secs| secs.min(MAX_RETRY_AFTER_SECS))
        .unwrap_or(10)
}
