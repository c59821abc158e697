use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;

use crate::{
    config::Settings,
    convert::{Converter, DEFAULT_DESCRIPTION, Progress},
    error, info,
    management::{CredentialStore, TokenManager},
    spotify::SpotifyClient,
    success,
    types::{ConversionStage, TrackMatch},
    warning,
    ytmusic::{YtMusicClient, auth::GoogleTokenEndpoint},
};

pub async fn convert(url: Option<String>, description: Option<String>, open: bool) {
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let client = Client::new();
    let tokens = Arc::new(token_manager(client.clone(), &settings));

    // fail fast on missing or unrefreshable credentials, before asking for input
    match tokens.ensure_valid().await {
        Ok(false) => success!("Valid access token found!"),
        Ok(true) => {}
        Err(e) => error!("{}", e),
    }

    let url = match url {
        Some(url) => url,
        None => match prompt("Enter a public Spotify playlist URL: ") {
            Ok(url) => url,
            Err(e) => error!("Cannot read playlist URL. Err: {}", e),
        },
    };

    if url.trim().is_empty() {
        error!("Please enter a Spotify playlist URL.");
    }

    let source = SpotifyClient::new(client.clone(), &settings);
    let catalog = YtMusicClient::new(client, &settings.ytmusic_api_url, tokens);
    let converter = Converter::new(&source, &catalog)
        .with_description(description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()));

    let mut progress = CliProgress::default();
    let report = match converter.convert(url.trim(), &mut progress).await {
        Ok(report) => report,
        Err(e) => error!("{}", e),
    };

    println!("{}", Table::new(report.table_rows()));

    match report.outcome() {
        Some(outcome) => warning!("{}", outcome),
        None => success!(
            "Added {} of {} songs to YouTube Music playlist '{}'!",
            report.added,
            report.requested,
            report.source_name
        ),
    }

    success!("YouTube Music Playlist Created: {}", report.playlist_url);

    if open && webbrowser::open(&report.playlist_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            report.playlist_url
        )
    }
}

pub(crate) fn token_manager(client: Client, settings: &Settings) -> TokenManager {
    let store = CredentialStore::new(settings.oauth_file.clone());
    let endpoint = GoogleTokenEndpoint::new(client, settings);
    TokenManager::new(store, Box::new(endpoint))
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[derive(Default)]
struct CliProgress {
    pb: Option<ProgressBar>,
}

impl CliProgress {
    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

impl Progress for CliProgress {
    fn stage(&mut self, stage: ConversionStage) {
        self.finish();

        match stage {
            ConversionStage::ReadingSource => {
                let pb = ProgressBar::new_spinner();
                pb.set_message("Fetching Spotify playlist...");
                pb.enable_steady_tick(Duration::from_millis(100));
                pb.set_style(
                    ProgressStyle::with_template("{spinner:.blue} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner())
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
                );
                self.pb = Some(pb);
            }
            ConversionStage::ResolvingTracks => {
                info!("Searching tracks on YouTube Music...");
                let pb = ProgressBar::new(0);
                pb.set_style(
                    ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                self.pb = Some(pb);
            }
            ConversionStage::CreatingDestinationPlaylist => {
                info!("Creating YouTube Music playlist...")
            }
            ConversionStage::AddingTracks => info!("Adding songs to playlist..."),
            ConversionStage::Idle | ConversionStage::Done | ConversionStage::Failed => {}
        }
    }

    fn track_resolved(&mut self, position: usize, total: usize, result: &TrackMatch) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_length(total as u64);
        pb.set_position(position as u64);
        pb.set_message(result.query.clone());

        if result.video_id.is_none() {
            pb.println(format!(
                "[{}] No match found for '{}'",
                "!".yellow().bold(),
                result.query
            ));
        }
    }
}
