mod common;

use common::{MockSource, item};
use spotitube::{
    error::ConvertError,
    spotify::playlist::{extract_playlist_id, fetch_tracks},
    types::{PlaylistItem, Track, TrackDescriptor},
};

#[test]
fn test_extract_playlist_id_from_share_link() {
    let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc";
    assert_eq!(
        extract_playlist_id(url).as_deref(),
        Some("37i9dQZF1DXcBWIGoYBM5M")
    );
}

#[test]
fn test_extract_playlist_id_variants() {
    // Without query string
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/playlist/abc123").as_deref(),
        Some("abc123")
    );

    // Localized path segment before playlist
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/intl-de/playlist/XyZ09?si=1").as_deref(),
        Some("XyZ09")
    );

    // Id stops at the first non-alphanumeric character
    assert_eq!(
        extract_playlist_id("playlist/abc_def").as_deref(),
        Some("abc")
    );
}

#[test]
fn test_extract_playlist_id_without_pattern() {
    assert_eq!(extract_playlist_id(""), None);
    assert_eq!(
        extract_playlist_id("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy"),
        None
    );
    assert_eq!(extract_playlist_id("https://open.spotify.com/playlist/"), None);
    assert_eq!(extract_playlist_id("not a url at all"), None);
}

#[tokio::test]
async fn test_fetch_tracks_formats_title_and_primary_artist() {
    let mut second = item("Song B", "Artist Y");
    if let Some(track) = second.track.as_mut() {
        track.artists.push(spotitube::types::TrackArtist {
            name: "Featured Z".to_string(),
        });
    }
    let source = MockSource::new("Road Trip", vec![item("Song A", "Artist X"), second]);

    let playlist = fetch_tracks(&source, "https://open.spotify.com/playlist/roadtrip42")
        .await
        .unwrap();

    assert_eq!(playlist.name, "Road Trip");
    let queries: Vec<String> = playlist.tracks.iter().map(|t| t.to_string()).collect();
    assert_eq!(queries, vec!["Song A - Artist X", "Song B - Artist Y"]);
    assert_eq!(
        source.requested_ids.lock().unwrap().as_slice(),
        ["roadtrip42".to_string()]
    );
}

#[tokio::test]
async fn test_fetch_tracks_skips_items_without_track() {
    let items = vec![
        item("Song A", "Artist X"),
        PlaylistItem { track: None },
        PlaylistItem {
            track: Some(Track {
                name: "Untitled".to_string(),
                artists: Vec::new(),
            }),
        },
    ];
    let source = MockSource::new("Mixed", items);

    let playlist = fetch_tracks(&source, "https://open.spotify.com/playlist/mixed")
        .await
        .unwrap();

    assert_eq!(
        playlist.tracks,
        vec![
            TrackDescriptor::new("Song A", "Artist X"),
            TrackDescriptor {
                title: "Untitled".to_string(),
                artist: None,
            },
        ]
    );
    assert_eq!(playlist.tracks[1].to_string(), "Untitled");
}

#[tokio::test]
async fn test_fetch_tracks_rejects_invalid_url() {
    let source = MockSource::new("Unused", vec![item("Song A", "Artist X")]);

    let err = fetch_tracks(&source, "https://example.com/nothing-here")
        .await
        .unwrap_err();

    assert!(matches!(err, ConvertError::InvalidPlaylistUrl(_)));
    assert!(source.requested_ids.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_tracks_reads_only_first_page() {
    let mut source = MockSource::new("Long", vec![item("Song A", "Artist X")]);
    source.next = Some("https://api.spotify.com/v1/playlists/long/tracks?offset=100".to_string());

    let playlist = fetch_tracks(&source, "https://open.spotify.com/playlist/long")
        .await
        .unwrap();

    assert_eq!(playlist.tracks.len(), 1);
}
