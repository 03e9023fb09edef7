//! Track filtering and random selection.
//!
//! Pure, order-preserving operations over an already-materialized track
//! list. Filtering is the AND of case-insensitive substring tests per
//! field; absent criteria are vacuously true.

use rand::seq::IndexedRandom;

use crate::{error::EmptyInputError, types::Track};

/// Substring criteria applied to a track list. All fields optional,
/// case-insensitive, AND-combined.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from raw user input, normalizing empty and
    /// whitespace-only strings to "no criterion".
    pub fn new(artist: Option<String>, album: Option<String>, track: Option<String>) -> Self {
        Self {
            artist: normalize(artist),
            album: normalize(album),
            track: normalize(track),
        }
    }

    /// True when no criterion is set; `matches` is then vacuously true.
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.album.is_none() && self.track.is_none()
    }

    /// AND of the per-field substring tests. The artist criterion matches
    /// when any credited artist name contains the substring.
    pub fn matches(&self, track: &Track) -> bool {
        if let Some(needle) = &self.artist {
            let needle = needle.to_lowercase();
            if !track
                .artists
                .iter()
                .any(|a| a.name.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(needle) = &self.album {
            if !track
                .album
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(needle) = &self.track {
            if !track.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the tracks matching `criteria`, in their original order. The
/// input is not mutated; calling twice with the same input yields the same
/// output.
pub fn filter_tracks(tracks: &[Track], criteria: &FilterCriteria) -> Vec<Track> {
    tracks
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}

/// Uniform random choice over a slice. Empty input is a reported error,
/// never a panic.
pub fn pick_random<T>(items: &[T]) -> Result<&T, EmptyInputError> {
    items.choose(&mut rand::rng()).ok_or(EmptyInputError)
}
