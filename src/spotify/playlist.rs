use std::sync::LazyLock;

use regex::Regex;

use crate::{
    Res,
    error::ConvertError,
    spotify::PlaylistSource,
    types::{SourcePlaylist, TrackDescriptor},
    warning,
};

static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([a-zA-Z0-9]+)").expect("valid playlist id pattern"));

/// Extracts the playlist id from a Spotify playlist URL.
///
/// Returns the alphanumeric segment following the first `playlist/` in the URL,
/// or `None` if the URL contains no such segment.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
/// assert_eq!(id.as_deref(), Some("37i9dQZF1DXcBWIGoYBM5M"));
/// ```
pub fn extract_playlist_id(url: &str) -> Option<String> {
    PLAYLIST_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Fetches the name and ordered tracks of a public Spotify playlist.
///
/// Only the first page of playlist items is read. Items without track metadata
/// (removed tracks, local files) are skipped.
///
/// # Errors
///
/// - [`ConvertError::InvalidPlaylistUrl`] if the URL holds no playlist id
/// - any error of the underlying [`PlaylistSource`]
pub async fn fetch_tracks(source: &dyn PlaylistSource, url: &str) -> Res<SourcePlaylist> {
    let playlist_id = extract_playlist_id(url)
        .ok_or_else(|| ConvertError::InvalidPlaylistUrl(url.to_string()))?;

    let name = source.fetch_playlist_name(&playlist_id).await?;
    let page = source.fetch_first_page(&playlist_id).await?;

    if page.next.is_some() {
        warning!(
            "Playlist '{}' has {} tracks, only the first {} are converted.",
            name,
            page.total.unwrap_or_default(),
            page.items.len()
        );
    }

    let tracks: Vec<TrackDescriptor> = page
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .map(TrackDescriptor::from)
        .collect();

    Ok(SourcePlaylist { name, tracks })
}
