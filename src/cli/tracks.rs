use tabled::Table;

use crate::{
    filter::{FilterCriteria, filter_tracks},
    info, spotify,
    types::{Track, TrackTableRow},
    warning,
};

use super::{require_token, spinner};

/// Lists the tracks of one playlist after applying the substring criteria.
///
/// The playlist is addressed by name or id; its track pages are drained
/// completely before filtering. Fetch failures discard partial data.
pub async fn list_tracks(
    playlist: String,
    artist: Option<String>,
    album: Option<String>,
    track: Option<String>,
) {
    let criteria = FilterCriteria::new(artist, album, track);
    let tracks = match fetch_playlist_tracks(&playlist).await {
        Some(tracks) => tracks,
        None => return,
    };

    let matches = filter_tracks(&tracks, &criteria);
    if matches.is_empty() {
        if criteria.is_empty() {
            info!("Playlist has no tracks.");
        } else {
            info!("No tracks matched the given filters.");
        }
        return;
    }

    info!("Found {} of {} tracks:", matches.len(), tracks.len());

    let rows: Vec<TrackTableRow> = matches
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: t.artist_names(),
            album: t.album.name.clone(),
            preview: if t.preview_url.is_some() {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

/// Resolves the playlist reference and materializes its full track list.
/// Prints the appropriate warning and returns `None` on any failure.
pub(crate) async fn fetch_playlist_tracks(playlist: &str) -> Option<Vec<Track>> {
    let token = require_token().await;

    let pb = spinner("Resolving playlist...");
    let resolved = match spotify::playlists::find_playlist(&token, playlist).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            pb.finish_and_clear();
            warning!("No playlist named or identified by '{}' was found.", playlist);
            return None;
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch playlists: {}", e);
            return None;
        }
    };

    pb.set_message(format!("Fetching tracks of '{}'...", resolved.name));
    let tracks = match spotify::playlists::get_playlist_tracks(&token, &resolved.id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch tracks: {}", e);
            return None;
        }
    };
    pb.finish_and_clear();

    Some(tracks)
}
