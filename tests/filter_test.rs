use spindcli::error::EmptyInputError;
use spindcli::filter::{FilterCriteria, filter_tracks, pick_random};
use spindcli::types::{ExternalUrls, Track, TrackAlbum, TrackArtist};

// Helper function to create a test track
fn create_test_track(name: &str, artist: &str, album: &str) -> Track {
    Track {
        id: Some(format!("{}_id", name)),
        uri: Some(format!("spotify:track:{}_id", name)),
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
        album: TrackAlbum {
            name: album.to_string(),
        },
        preview_url: None,
        external_urls: ExternalUrls::default(),
    }
}

fn sample_tracks() -> Vec<Track> {
    vec![
        create_test_track("Come Together", "The Beatles", "Abbey Road"),
        create_test_track("Paranoid Android", "Radiohead", "OK Computer"),
        create_test_track("Karma Police", "Radiohead", "OK Computer"),
        create_test_track("Something", "The Beatles", "Abbey Road"),
    ]
}

#[test]
fn test_filter_artist_case_insensitive() {
    let tracks = vec![
        create_test_track("Come Together", "The Beatles", "Abbey Road"),
        create_test_track("Paranoid Android", "Radiohead", "OK Computer"),
    ];

    let criteria = FilterCriteria::new(Some("beatles".to_string()), None, None);
    let matches = filter_tracks(&tracks, &criteria);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Come Together");
}

#[test]
fn test_filter_criteria_are_and_combined() {
    let tracks = sample_tracks();

    // artist matches two tracks, track title narrows it to one
    let criteria = FilterCriteria::new(
        Some("radiohead".to_string()),
        None,
        Some("karma".to_string()),
    );
    let matches = filter_tracks(&tracks, &criteria);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Karma Police");

    // conflicting criteria match nothing
    let criteria = FilterCriteria::new(
        Some("radiohead".to_string()),
        Some("abbey".to_string()),
        None,
    );
    assert!(filter_tracks(&tracks, &criteria).is_empty());
}

#[test]
fn test_filter_album_substring() {
    let tracks = sample_tracks();

    let criteria = FilterCriteria::new(None, Some("ok comp".to_string()), None);
    let matches = filter_tracks(&tracks, &criteria);

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|t| t.album.name == "OK Computer"));
}

#[test]
fn test_empty_criteria_match_everything_in_order() {
    let tracks = sample_tracks();

    let criteria = FilterCriteria::new(None, None, None);
    assert!(criteria.is_empty());

    let matches = filter_tracks(&tracks, &criteria);
    assert_eq!(matches.len(), tracks.len());

    let original: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    let filtered: Vec<&str> = matches.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(original, filtered);
}

#[test]
fn test_whitespace_criteria_normalize_to_none() {
    let criteria = FilterCriteria::new(Some("   ".to_string()), Some(String::new()), None);
    assert!(criteria.is_empty());

    let tracks = sample_tracks();
    assert_eq!(filter_tracks(&tracks, &criteria).len(), tracks.len());
}

#[test]
fn test_filter_preserves_order() {
    let tracks = sample_tracks();

    let criteria = FilterCriteria::new(None, Some("abbey".to_string()), None);
    let matches = filter_tracks(&tracks, &criteria);

    let names: Vec<&str> = matches.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Come Together", "Something"]);
}

#[test]
fn test_filter_is_idempotent() {
    let tracks = sample_tracks();
    let criteria = FilterCriteria::new(Some("radiohead".to_string()), None, None);

    let first = filter_tracks(&tracks, &criteria);
    let second = filter_tracks(&tracks, &criteria);

    let first_names: Vec<&str> = first.iter().map(|t| t.name.as_str()).collect();
    let second_names: Vec<&str> = second.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(first_names, second_names);

    // the input itself is untouched
    assert_eq!(tracks.len(), 4);
}

#[test]
fn test_multi_artist_track_matches_any_artist() {
    let mut track = create_test_track("Under Pressure", "Queen", "Hot Space");
    track.artists.push(TrackArtist {
        name: "David Bowie".to_string(),
    });

    let criteria = FilterCriteria::new(Some("bowie".to_string()), None, None);
    assert!(criteria.matches(&track));

    let criteria = FilterCriteria::new(Some("queen".to_string()), None, None);
    assert!(criteria.matches(&track));

    let criteria = FilterCriteria::new(Some("prince".to_string()), None, None);
    assert!(!criteria.matches(&track));
}

#[test]
fn test_pick_random_empty_input_fails() {
    let tracks: Vec<Track> = Vec::new();
    let result = pick_random(&tracks);
    assert_eq!(result.unwrap_err(), EmptyInputError);
}

#[test]
fn test_pick_random_singleton_always_returns_it() {
    let tracks = vec![create_test_track("Something", "The Beatles", "Abbey Road")];

    for _ in 0..10 {
        let pick = pick_random(&tracks).unwrap();
        assert_eq!(pick.name, "Something");
    }
}

#[test]
fn test_pick_random_returns_member_of_input() {
    let tracks = sample_tracks();
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();

    for _ in 0..20 {
        let pick = pick_random(&tracks).unwrap();
        assert!(names.contains(&pick.name.as_str()));
    }
}
