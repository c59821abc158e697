use serde_json::Value;

use crate::{Res, types::TrackDescriptor, ytmusic::MusicCatalog};

/// Resolves a source track to the first song result on YouTube Music.
///
/// The query is the `"{title} - {artist}"` rendering of the descriptor. There is
/// no scoring, no retry without the songs filter and no check of the artist name.
pub async fn resolve(catalog: &dyn MusicCatalog, track: &TrackDescriptor) -> Res<Option<String>> {
    let results = catalog.search_songs(&track.to_string()).await?;
    Ok(results.into_iter().next())
}

/// Video ids of the song results in a search response, in result order.
pub fn song_video_ids(response: &Value) -> Vec<String> {
    let sections = response
        .pointer("/contents/tabbedSearchResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents")
        .or_else(|| response.pointer("/contents/sectionListRenderer/contents"))
        .and_then(Value::as_array);

    let Some(sections) = sections else {
        return Vec::new();
    };

    sections
        .iter()
        .filter_map(|section| section.pointer("/musicShelfRenderer/contents"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|item| item.get("musicResponsiveListItemRenderer"))
        .filter_map(item_video_id)
        .collect()
}

fn item_video_id(renderer: &Value) -> Option<String> {
    const CANDIDATES: [&str; 3] = [
        "/playlistItemData/videoId",
        "/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId",
        "/flexColumns/0/musicResponsiveListItemFlexColumnRenderer/text/runs/0/navigationEndpoint/watchEndpoint/videoId",
    ];

    CANDIDATES
        .iter()
        .find_map(|path| renderer.pointer(path).and_then(Value::as_str))
        .map(str::to_string)
}
