//! # Spotify Integration Module
//!
//! Source side of a conversion. Reads public playlists from the Spotify Web API
//! using an app-level client-credentials token; no user login is involved.
//!
//! ## Modules
//!
//! - [`auth`] - client-credentials grant with an in-memory token cache
//! - [`client`] - [`SpotifyClient`], the HTTP implementation of [`PlaylistSource`]
//! - [`playlist`] - playlist id extraction and track listing (the playlist reader)
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token
//! - `GET /playlists/{id}?fields=name` - playlist name
//! - `GET /playlists/{id}/tracks` - first page of playlist items
//!
//! ## Usage
//!
//! ```rust
//! let source = SpotifyClient::new(reqwest::Client::new(), &settings);
//! let playlist = spotify::playlist::fetch_tracks(&source, url).await?;
//! for track in playlist.tracks {
//!     println!("{}", track);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod playlist;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{Res, types::PlaylistTracksResponse};

/// Read access to source playlists.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    async fn fetch_playlist_name(&self, playlist_id: &str) -> Res<String>;

    /// First page of playlist items, in playlist order.
    async fn fetch_first_page(&self, playlist_id: &str) -> Res<PlaylistTracksResponse>;
}
