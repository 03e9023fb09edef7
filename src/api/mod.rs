//! # API Module
//!
//! HTTP endpoints served by the temporary local callback server during the
//! OAuth flow.
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server, verifies the CSRF `state` parameter, and exchanges the
//!   authorization code for a token.
//! - [`health`] - Returns application status and version for a quick
//!   liveness probe while the server is up.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! function wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
