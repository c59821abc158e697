use crate::{Res, ytmusic::MusicCatalog};

/// Prefix of every shareable YouTube Music playlist link.
pub const PLAYLIST_URL: &str = "https://music.youtube.com/playlist?list=";

/// Returns the shareable link of a YouTube Music playlist.
///
/// # Arguments
///
/// * `playlist_id` - Id returned by [`create_playlist`]
///
/// # Example
///
/// ```
/// let url = playlist_url("PLabc");
/// assert_eq!(url, "https://music.youtube.com/playlist?list=PLabc");
/// ```
pub fn playlist_url(playlist_id: &str) -> String {
    format!("{PLAYLIST_URL}{playlist_id}")
}

/// Creates an empty destination playlist and returns its id.
///
/// # Arguments
///
/// * `catalog` - Destination service the playlist is created on
/// * `name` - Title of the new playlist, usually the source playlist name
/// * `description` - Free text shown below the title
///
/// # Errors
///
/// Propagates the catalog's error, e.g. [`crate::error::ConvertError::Api`] when
/// the service rejects the request or a credential error when the access token
/// cannot be refreshed.
///
/// # Example
///
/// ```
/// let id = create_playlist(&catalog, "Road Trip", "Converted from Spotify").await?;
/// println!("{}", playlist_url(&id));
/// ```
pub async fn create_playlist(
    catalog: &dyn MusicCatalog,
    name: &str,
    description: &str,
) -> Res<String> {
    catalog.create_playlist(name, description).await
}

/// Appends `video_ids` to the playlist in a single batch, keeping their order.
///
/// # Arguments
///
/// * `catalog` - Destination service holding the playlist
/// * `playlist_id` - Target playlist
/// * `video_ids` - Resolved song ids, in source playlist order
///
/// # Returns
///
/// The number of added items. An empty list is not an error: no request is made
/// and `0` is returned, leaving it to the caller to report the empty outcome.
///
/// # Errors
///
/// Propagates the catalog's error; nothing is retried.
pub async fn add_items(
    catalog: &dyn MusicCatalog,
    playlist_id: &str,
    video_ids: &[String],
) -> Res<usize> {
    if video_ids.is_empty() {
        return Ok(0);
    }

    catalog.add_playlist_items(playlist_id, video_ids).await?;
    Ok(video_ids.len())
}
