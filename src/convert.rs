//! Conversion orchestrator.
//!
//! A conversion walks a fixed sequence of stages:
//!
//! ```text
//! Idle -> ReadingSource -> ResolvingTracks -> CreatingDestinationPlaylist -> AddingTracks -> Done
//! ```
//!
//! Any stage may end in `Failed`. Nothing is written to the destination before the
//! source playlist was read successfully and holds at least one track. Tracks are
//! resolved one after another in source order, and the resolved ids are added in
//! that same order.

use crate::{
    Res,
    error::ConvertError,
    spotify::{self, PlaylistSource},
    types::{ConversionReport, ConversionStage, TrackMatch},
    warning,
    ytmusic::{self, MusicCatalog},
};

pub const DEFAULT_DESCRIPTION: &str = "Converted from Spotify";

/// Observer of a running conversion. Every method defaults to doing nothing.
pub trait Progress {
    fn stage(&mut self, _stage: ConversionStage) {}

    /// Called once per source track, after its search finished. `position` is 1-based.
    fn track_resolved(&mut self, _position: usize, _total: usize, _result: &TrackMatch) {}
}

/// [`Progress`] that ignores every event.
pub struct Silent;

impl Progress for Silent {}

pub struct Converter<'a> {
    source: &'a dyn PlaylistSource,
    catalog: &'a dyn MusicCatalog,
    description: String,
}

impl<'a> Converter<'a> {
    pub fn new(source: &'a dyn PlaylistSource, catalog: &'a dyn MusicCatalog) -> Self {
        Self {
            source,
            catalog,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Converts the Spotify playlist behind `url` into a new YouTube Music playlist.
    ///
    /// When no track could be matched the playlist is still created and the report
    /// has `added == 0`; see [`ConversionReport::outcome`].
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidPlaylistUrl`] if `url` holds no playlist id
    /// - [`ConvertError::NoTracksFound`] if the playlist is empty or could not be read
    /// - credential and transport errors of the destination service
    pub async fn convert(&self, url: &str, progress: &mut dyn Progress) -> Res<ConversionReport> {
        let result = self.run(url, progress).await;
        match &result {
            Ok(_) => progress.stage(ConversionStage::Done),
            Err(_) => progress.stage(ConversionStage::Failed),
        }
        result
    }

    async fn run(&self, url: &str, progress: &mut dyn Progress) -> Res<ConversionReport> {
        progress.stage(ConversionStage::ReadingSource);
        let source = match spotify::playlist::fetch_tracks(self.source, url).await {
            Ok(source) => source,
            Err(e @ ConvertError::InvalidPlaylistUrl(_)) => return Err(e),
            Err(e) => {
                warning!("Failed to read Spotify playlist: {}", e);
                return Err(ConvertError::NoTracksFound);
            }
        };

        if source.tracks.is_empty() {
            return Err(ConvertError::NoTracksFound);
        }

        progress.stage(ConversionStage::ResolvingTracks);
        let total = source.tracks.len();
        let mut matches = Vec::with_capacity(total);
        for (i, track) in source.tracks.iter().enumerate() {
            let video_id = ytmusic::search::resolve(self.catalog, track).await?;
            let result = TrackMatch {
                query: track.to_string(),
                video_id,
            };
            progress.track_resolved(i + 1, total, &result);
            matches.push(result);
        }

        let video_ids: Vec<String> = matches.iter().filter_map(|m| m.video_id.clone()).collect();

        progress.stage(ConversionStage::CreatingDestinationPlaylist);
        let playlist_id =
            ytmusic::playlist::create_playlist(self.catalog, &source.name, &self.description)
                .await?;

        progress.stage(ConversionStage::AddingTracks);
        let added = ytmusic::playlist::add_items(self.catalog, &playlist_id, &video_ids).await?;

        Ok(ConversionReport {
            source_name: source.name,
            playlist_url: ytmusic::playlist::playlist_url(&playlist_id),
            playlist_id,
            requested: total,
            added,
            matches,
        })
    }
}

impl ConversionReport {
    /// [`ConvertError::NoMatchesFound`] when the playlist was created but stayed empty.
    pub fn outcome(&self) -> Option<ConvertError> {
        (self.added == 0).then_some(ConvertError::NoMatchesFound)
    }
}
