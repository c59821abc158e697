mod common;

use common::MockCatalog;
use serde_json::{Value, json};
use spotitube::{
    types::TrackDescriptor,
    ytmusic::{
        playlist::{add_items, playlist_url},
        search::{resolve, song_video_ids},
    },
};

// Helper function to build a song row the way the search endpoint returns it
fn song_row(video_id: &str) -> Value {
    json!({
        "musicResponsiveListItemRenderer": {
            "flexColumns": [{
                "musicResponsiveListItemFlexColumnRenderer": {
                    "text": { "runs": [{
                        "text": "Song",
                        "navigationEndpoint": { "watchEndpoint": { "videoId": video_id } }
                    }]}
                }
            }],
            "playlistItemData": { "videoId": video_id }
        }
    })
}

fn search_response(sections: Vec<Value>) -> Value {
    json!({
        "contents": {
            "tabbedSearchResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "content": { "sectionListRenderer": { "contents": sections } }
                    }
                }]
            }
        }
    })
}

#[test]
fn test_song_video_ids_in_result_order() {
    let response = search_response(vec![
        json!({ "itemSectionRenderer": { "contents": [] } }),
        json!({ "musicShelfRenderer": { "contents": [song_row("first"), song_row("second")] } }),
    ]);

    assert_eq!(song_video_ids(&response), vec!["first", "second"]);
}

#[test]
fn test_song_video_ids_falls_back_to_overlay_and_flex_column() {
    let overlay = json!({
        "musicResponsiveListItemRenderer": {
            "overlay": { "musicItemThumbnailOverlayRenderer": { "content": {
                "musicPlayButtonRenderer": { "playNavigationEndpoint": {
                    "watchEndpoint": { "videoId": "fromOverlay" }
                }}
            }}}
        }
    });
    let mut flex_only = song_row("fromFlex");
    flex_only["musicResponsiveListItemRenderer"]
        .as_object_mut()
        .unwrap()
        .remove("playlistItemData");

    let response = search_response(vec![json!({
        "musicShelfRenderer": { "contents": [overlay, flex_only] }
    })]);

    assert_eq!(song_video_ids(&response), vec!["fromOverlay", "fromFlex"]);
}

#[test]
fn test_song_video_ids_empty_results() {
    assert!(song_video_ids(&json!({})).is_empty());
    assert!(song_video_ids(&search_response(Vec::new())).is_empty());

    // A row without any video id is not a song result
    let response = search_response(vec![json!({
        "musicShelfRenderer": { "contents": [{ "musicResponsiveListItemRenderer": {} }] }
    })]);
    assert!(song_video_ids(&response).is_empty());
}

#[tokio::test]
async fn test_resolve_takes_first_result() {
    let catalog = MockCatalog::with_results(&[("Song A - Artist X", &["vid123", "vid456"])]);

    let found = resolve(&catalog, &TrackDescriptor::new("Song A", "Artist X"))
        .await
        .unwrap();
    let missing = resolve(&catalog, &TrackDescriptor::new("Song B", "Artist Y"))
        .await
        .unwrap();

    assert_eq!(found.as_deref(), Some("vid123"));
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_add_items_with_empty_list_is_noop() {
    let catalog = MockCatalog::default();

    let count = add_items(&catalog, "PL1", &[]).await.unwrap();

    assert_eq!(count, 0);
    assert!(catalog.added.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_items_single_batch() {
    let catalog = MockCatalog::default();
    let ids = vec!["a".to_string(), "b".to_string()];

    let count = add_items(&catalog, "PL1", &ids).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        catalog.added.lock().unwrap().as_slice(),
        [("PL1".to_string(), ids)]
    );
}

#[test]
fn test_playlist_url() {
    assert_eq!(
        playlist_url("PLabc"),
        "https://music.youtube.com/playlist?list=PLabc"
    );
}
