use tabled::Table;

use crate::{
    info, spotify,
    types::{Playlist, PlaylistTableRow},
    warning,
};

use super::{require_token, spinner};

/// Lists all playlists of the authenticated user, optionally filtered by a
/// case-insensitive name substring. A failed fetch discards everything and
/// prints a warning.
pub async fn list_playlists(search: Option<String>) {
    let token = require_token().await;

    let pb = spinner("Fetching playlists...");
    let playlists = match spotify::playlists::get_user_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch playlists: {}", e);
            return;
        }
    };
    pb.finish_and_clear();

    let mut playlists: Vec<Playlist> = match search {
        Some(term) => {
            let term = term.to_lowercase();
            playlists
                .into_iter()
                .filter(|p| p.name.to_lowercase().contains(&term))
                .collect()
        }
        None => playlists,
    };

    if playlists.is_empty() {
        info!("No playlists found.");
        return;
    }

    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.tracks.total,
            id: p.id,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
