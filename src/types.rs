use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Seconds subtracted from a token's nominal lifetime when checking expiry.
///
/// Covers clock skew between this machine and the token endpoint plus the
/// time a request spends in flight. A token within this margin of its
/// expiry is treated as already expired and refreshed before use.
pub const EXPIRY_SKEW_SECS: u64 = 60;

/// An OAuth credential as held by a session.
///
/// `expires_in` and `obtained_at` are both unix-second quantities; the
/// absolute expiry instant is always derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Unix timestamp at which the access token stops being accepted.
    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }

    /// Whether the access token must be refreshed before use at `now`.
    ///
    /// Applies the [`EXPIRY_SKEW_SECS`] margin, so a token reports expired
    /// slightly before its nominal expiry instant.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now + EXPIRY_SKEW_SECS >= self.expires_at()
    }
}

/// Wire shape of the token endpoint response.
///
/// On refresh Spotify may omit `refresh_token` and `scope`; callers keep
/// the previous values in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: u64,
}

/// Shared state between the interactive auth flow and the callback handler.
///
/// The CSRF `state` parameter is generated before the browser redirect and
/// must round-trip through the authorization endpoint unchanged.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub csrf_state: String,
    pub token: Option<Token>,
}

/// One page of a cursor-paginated collection.
///
/// `next` is an absolute URL to the following page, absent on the last one.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

/// Wrapper item of the playlist-tracks endpoint. `track` is null for
/// removed or local entries; those are skipped during materialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Track {
    /// All credited artist names joined with ", ".
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of the playback-start request.
#[derive(Debug, Clone, Serialize)]
pub struct PlayRequest {
    pub uris: Vec<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub preview: String,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    pub kind: String,
    pub active: String,
    pub id: String,
}
