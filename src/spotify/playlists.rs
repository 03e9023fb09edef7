use crate::{
    config,
    error::FetchError,
    types::{Playlist, PlaylistItem, Track},
};

use super::{ApiPageSource, fetch_all, http_client};

/// Field projection for the playlist-tracks endpoint: just what the table
/// and the dice roll need, plus the paging cursor.
const TRACK_FIELDS: &str =
    "items.track(id,uri,name,preview_url,external_urls.spotify,artists(name),album(name)),next";

/// Retrieves all playlists of the authenticated user.
///
/// Drains the `/me/playlists` pagination completely, in server order. Any
/// page failure aborts the fetch and discards what was gathered.
pub async fn get_user_playlists(token: &str) -> Result<Vec<Playlist>, FetchError> {
    let client = http_client();
    let mut source = ApiPageSource::new(&client, token);
    let first_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );

    fetch_all(&mut source, first_url).await
}

/// Retrieves every track of one playlist.
///
/// Null track entries (removed or local items) are skipped; everything
/// else is returned in playlist order.
pub async fn get_playlist_tracks(token: &str, playlist_id: &str) -> Result<Vec<Track>, FetchError> {
    let client = http_client();
    let mut source = ApiPageSource::new(&client, token);
    let first_url = format!(
        "{uri}/playlists/{id}/tracks?limit=100&fields={fields}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        fields = TRACK_FIELDS
    );

    let items: Vec<PlaylistItem> = fetch_all(&mut source, first_url).await?;

    Ok(items.into_iter().filter_map(|item| item.track).collect())
}

/// Resolves a user-supplied playlist reference against the playlist list.
///
/// An exact case-insensitive name match wins (first in server order), then
/// a raw id match. `Ok(None)` means the reference matched nothing.
pub async fn find_playlist(
    token: &str,
    name_or_id: &str,
) -> Result<Option<Playlist>, FetchError> {
    let playlists = get_user_playlists(token).await?;
    let wanted = name_or_id.to_lowercase();

    let by_name = playlists
        .iter()
        .find(|p| p.name.to_lowercase() == wanted)
        .cloned();
    if by_name.is_some() {
        return Ok(by_name);
    }

    Ok(playlists.into_iter().find(|p| p.id == name_or_id))
}
