//! Error taxonomy for the crate.
//!
//! Each variant group maps to one recoverable failure class: authentication
//! (forces re-authorization), collection fetching (warn and discard),
//! selection over an empty collection (informational), and playback control
//! (a device problem, distinct from a credentials problem). None of these
//! are fatal to the process; every one is recoverable by retrying the
//! originating command.

use std::fmt;

use reqwest::StatusCode;

/// Failure of the token lifecycle: code exchange, refresh, or a missing
/// stored credential. Always resolved by running `spindcli auth` again.
#[derive(Debug)]
pub enum AuthError {
    /// The authorization-code exchange was rejected (invalid, expired, or
    /// already-consumed code).
    Exchange(String),
    /// The refresh-token exchange was rejected. The caller must discard the
    /// credential and restart the authorization flow.
    Refresh(String),
    /// No usable credential is available.
    NotAuthenticated(String),
    /// Authorize-URL or redirect configuration could not be assembled.
    Config(String),
    Http(reqwest::Error),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Exchange(msg) => write!(f, "authorization code exchange failed: {}", msg),
            AuthError::Refresh(msg) => write!(f, "token refresh failed: {}", msg),
            AuthError::NotAuthenticated(msg) => write!(f, "not authenticated: {}", msg),
            AuthError::Config(msg) => write!(f, "invalid auth configuration: {}", msg),
            AuthError::Http(err) => write!(f, "auth request failed: {}", err),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Http(err)
    }
}

/// Failure while draining a paginated collection. Partial results are
/// discarded by every caller; the user sees a warning and no data.
#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    /// The API kept answering with a retryable status past the retry budget,
    /// or answered with something that is not a page.
    Api(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(err) => write!(f, "request failed: {}", err),
            FetchError::Api(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

/// Random selection was asked for on an empty collection.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot pick from an empty track list")
    }
}

impl std::error::Error for EmptyInputError {}

/// Failure to control playback on a remote device. Reported distinctly from
/// auth failures so the user understands it is a device issue.
#[derive(Debug)]
pub enum PlaybackError {
    /// No device is active and none was addressed explicitly (HTTP 404).
    NoActiveDevice,
    /// The granted scope does not permit playback control (HTTP 403).
    InsufficientScope,
    /// Any other non-success status from the player endpoints.
    Api(StatusCode),
    Http(reqwest::Error),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::NoActiveDevice => write!(f, "no active playback device"),
            PlaybackError::InsufficientScope => {
                write!(f, "playback scope not granted for this token")
            }
            PlaybackError::Api(status) => write!(f, "player endpoint answered {}", status),
            PlaybackError::Http(err) => write!(f, "player request failed: {}", err),
        }
    }
}

impl std::error::Error for PlaybackError {}

impl From<reqwest::Error> for PlaybackError {
    fn from(err: reqwest::Error) -> Self {
        PlaybackError::Http(err)
    }
}
