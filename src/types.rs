use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Contents of the YouTube Music credential file.
///
/// Fields the converter does not use (`scope`, `token_type`, ...) are kept in
/// `extra` so that rewriting the file after a refresh does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(deserialize_with = "unix_seconds")]
    pub expires_at: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CredentialRecord {
    /// Creates a record without extra fields.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Bearer token for YouTube Music requests
    /// * `refresh_token` - Long-lived token traded for new access tokens
    /// * `expires_at` - Unix timestamp (seconds) after which the access token is stale
    pub fn new(access_token: String, refresh_token: String, expires_at: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
            extra: Map::new(),
        }
    }

    /// Whether the access token is stale at `now` (unix seconds).
    ///
    /// A token is treated as expired from the exact second of `expires_at` on.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

// The auth flow may write `expires_at` as a float timestamp.
fn unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|f| f as i64))
        .ok_or_else(|| serde::de::Error::custom("expires_at is not a valid timestamp"))
}

/// Successful answer of the OAuth token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Title and primary artist of one source track.
///
/// Its [`Display`](fmt::Display) form is the destination search query:
/// `"{title} - {artist}"`, or the bare title when the track lists no artist.
///
/// # Example
///
/// ```
/// let track = TrackDescriptor::new("Song A", "Artist X");
/// assert_eq!(track.to_string(), "Song A - Artist X");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub title: String,
    pub artist: Option<String>,
}

impl TrackDescriptor {
    /// Creates a descriptor for a track with a known artist.
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: Some(artist.into()),
        }
    }
}

impl fmt::Display for TrackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artist {
            Some(artist) => write!(f, "{} - {}", self.title, artist),
            None => write!(f, "{}", self.title),
        }
    }
}

/// A Spotify playlist as read by the playlist reader.
///
/// `tracks` keeps the playlist order and holds at most one page of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlaylist {
    pub name: String,
    pub tracks: Vec<TrackDescriptor>,
}

/// Outcome of resolving one source track against the destination catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMatch {
    /// Search query sent for the track, `"{title} - {artist}"`.
    pub query: String,
    pub video_id: Option<String>,
}

/// One line of the per-track result table printed after a conversion.
#[derive(Tabled)]
pub struct TrackMatchTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub track: String,
    #[tabled(rename = "youtube music")]
    pub video_id: String,
}

/// Result of a conversion that reached the destination service.
///
/// `requested - added` is the number of source tracks without a match; the
/// individual tracks are listed in `matches`, in source order.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Name of the Spotify playlist, also used for the new playlist.
    pub source_name: String,
    pub playlist_id: String,
    /// Shareable `music.youtube.com` link of the new playlist.
    pub playlist_url: String,
    /// Number of source tracks searched.
    pub requested: usize,
    /// Number of songs added to the new playlist.
    pub added: usize,
    pub matches: Vec<TrackMatch>,
}

impl ConversionReport {
    /// Source tracks for which the search returned no song.
    pub fn unmatched(&self) -> impl Iterator<Item = &TrackMatch> {
        self.matches.iter().filter(|m| m.video_id.is_none())
    }

    /// Rows for the result table, numbered from 1. Unmatched tracks show `-`.
    pub fn table_rows(&self) -> Vec<TrackMatchTableRow> {
        self.matches
            .iter()
            .enumerate()
            .map(|(i, m)| TrackMatchTableRow {
                position: i + 1,
                track: m.query.clone(),
                video_id: m.video_id.clone().unwrap_or_else(|| "-".to_string()),
            })
            .collect()
    }
}

/// Stages of a conversion.
///
/// A conversion moves strictly forward:
///
/// ```text
/// Idle -> ReadingSource -> ResolvingTracks -> CreatingDestinationPlaylist -> AddingTracks -> Done
/// ```
///
/// `Failed` ends a conversion from any stage. Nothing is written to YouTube Music
/// before `CreatingDestinationPlaylist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    Idle,
    ReadingSource,
    ResolvingTracks,
    CreatingDestinationPlaylist,
    AddingTracks,
    Done,
    Failed,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConversionStage::Idle => "idle",
            ConversionStage::ReadingSource => "reading source playlist",
            ConversionStage::ResolvingTracks => "resolving tracks",
            ConversionStage::CreatingDestinationPlaylist => "creating destination playlist",
            ConversionStage::AddingTracks => "adding tracks",
            ConversionStage::Done => "done",
            ConversionStage::Failed => "failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCredentialsToken {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistMetadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

impl From<Track> for TrackDescriptor {
    fn from(track: Track) -> Self {
        TrackDescriptor {
            title: track.name,
            artist: track.artists.into_iter().next().map(|a| a.name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub title: String,
    pub description: String,
    pub privacy_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistResponse {
    pub playlist_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPlaylistRequest {
    pub playlist_id: String,
    pub actions: Vec<EditPlaylistAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPlaylistAction {
    pub action: String,
    pub added_video_id: String,
    pub dedupe_option: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPlaylistResponse {
    #[serde(default)]
    pub status: Option<String>,
}
