//! # YouTube Music Integration Module
//!
//! Destination side of a conversion. Talks to the InnerTube API behind
//! `music.youtube.com` with the user's OAuth access token, which is refreshed
//! through Google's token endpoint when it has expired.
//!
//! ## Modules
//!
//! - [`auth`] - [`auth::GoogleTokenEndpoint`], refresh-token exchange
//! - [`client`] - [`YtMusicClient`], the HTTP implementation of [`MusicCatalog`]
//! - [`search`] - the track resolver and search response parsing
//! - [`playlist`] - the playlist writer (create, add items, links)
//!
//! ## API Coverage
//!
//! - `POST /youtubei/v1/search` - catalog search with the songs filter
//! - `POST /youtubei/v1/playlist/create` - new private playlist
//! - `POST /youtubei/v1/browse/edit_playlist` - batch add of videos
//! - `POST https://oauth2.googleapis.com/token` - access token refresh

pub mod auth;
pub mod client;
pub mod playlist;
pub mod search;

use async_trait::async_trait;

pub use client::YtMusicClient;

use crate::Res;

/// Search and playlist operations of the destination service.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Video ids of the song results for `query`, best first. Empty if nothing matched.
    async fn search_songs(&self, query: &str) -> Res<Vec<String>>;

    async fn create_playlist(&self, name: &str, description: &str) -> Res<String>;

    /// Appends all `video_ids` in order with one request.
    async fn add_playlist_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()>;
}
