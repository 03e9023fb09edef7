//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the token
//! lifecycle, the Spotify fetchers, and the filter/selection logic, and
//! handles progress feedback and error presentation.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow against Spotify
//! - [`list_playlists`] - All playlists of the user, optional name search
//! - [`list_tracks`] - Tracks of one playlist, filtered by artist, album,
//!   and track substrings
//! - [`roll`] - Random pick from a (filtered) playlist, optionally started
//!   on a playback device
//! - [`list_devices`] - Available playback devices
//!
//! ## Error presentation
//!
//! Failed fetches discard any partial data and print a warning; an empty
//! selection prints an informational message; playback problems are named
//! as device issues; a missing or unrefreshable credential instructs the
//! user to rerun `spindcli auth`.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager};

mod auth;
mod devices;
mod playlists;
mod roll;
mod tracks;

pub use auth::auth;
pub use devices::list_devices;
pub use playlists::list_playlists;
pub use roll::roll;
pub use tracks::list_tracks;

/// Loads the cached credential and returns a currently valid access token.
/// Terminates the command with guidance when the user has to (re)authorize.
pub(crate) async fn require_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spindcli auth\n Error: {}",
                e
            );
        }
    };

    match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Credential expired and could not be refreshed ({}). Please run spindcli auth", e);
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
