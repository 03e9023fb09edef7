use crate::{
    error::PlaybackError,
    filter::{FilterCriteria, filter_tracks, pick_random},
    info, spotify, success,
    types::Track,
    warning,
};

use super::{require_token, tracks::fetch_playlist_tracks};

/// Rolls the dice: fetches a playlist, applies the filters, and picks one
/// track uniformly at random. With `play` set the pick is started on a
/// playback device.
pub async fn roll(
    playlist: String,
    artist: Option<String>,
    album: Option<String>,
    track: Option<String>,
    play: bool,
    device: Option<String>,
) {
    let criteria = FilterCriteria::new(artist, album, track);
    let tracks = match fetch_playlist_tracks(&playlist).await {
        Some(tracks) => tracks,
        None => return,
    };

    let candidates = filter_tracks(&tracks, &criteria);
    let pick = match pick_random(&candidates) {
        Ok(pick) => pick,
        Err(_) => {
            if criteria.is_empty() {
                info!("Playlist has no tracks to roll on.");
            } else {
                info!("No tracks matched the given filters; nothing to roll on.");
            }
            return;
        }
    };

    success!(
        "Rolled: {} - {} ({})",
        pick.name,
        pick.artist_names(),
        pick.album.name
    );

    match &pick.preview_url {
        Some(url) => info!("30-second preview: {}", url),
        None => {
            info!("No preview available for this track.");
            if let Some(url) = &pick.external_urls.spotify {
                info!("Open in Spotify: {}", url);
            }
        }
    }

    if play {
        start_playback(pick, device).await;
    }
}

async fn start_playback(pick: &Track, device: Option<String>) {
    let Some(uri) = pick.uri.clone() else {
        warning!("Track has no playable URI; cannot start playback.");
        return;
    };

    let token = require_token().await;

    let device_id = match device {
        Some(wanted) => match resolve_device(&token, &wanted).await {
            Some(id) => Some(id),
            None => return,
        },
        None => None,
    };

    match spotify::player::play(&token, device_id.as_deref(), vec![uri]).await {
        Ok(()) => success!("Playback started."),
        Err(PlaybackError::NoActiveDevice) => {
            warning!(
                "No active device. Open Spotify on a device or pass --device <name>; see spindcli devices."
            );
        }
        Err(PlaybackError::InsufficientScope) => {
            warning!(
                "The stored token lacks playback scope. Rerun spindcli auth to grant user-modify-playback-state."
            );
        }
        Err(e) => warning!("Failed to start playback: {}", e),
    }
}

/// Maps a device name (case-insensitive) or raw id to a device id. Prints
/// the failure reason and returns `None` when nothing matches.
async fn resolve_device(token: &str, wanted: &str) -> Option<String> {
    let devices = match spotify::player::get_devices(token).await {
        Ok(devices) => devices,
        Err(e) => {
            warning!("Failed to list devices: {}", e);
            return None;
        }
    };

    let wanted_lower = wanted.to_lowercase();
    let found = devices
        .iter()
        .find(|d| d.name.to_lowercase() == wanted_lower || d.id.as_deref() == Some(wanted));

    match found.and_then(|d| d.id.clone()) {
        Some(id) => Some(id),
        None => {
            warning!("No device matching '{}' found; see spindcli devices.", wanted);
            None
        }
    }
}
