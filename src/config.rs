//! Configuration management for SpotiTube.
//!
//! Configuration comes from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`{data_local_dir}/spotitube/.env`)
//! 4. Application defaults for endpoints and the credential file location
//!
//! Client ids and secrets have no defaults; [`Settings::from_env`] reports the first
//! missing one as [`ConvertError::MissingConfig`].

use std::{env, io, path::PathBuf};

use crate::{Res, error::ConvertError, warning};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_YOUTUBE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_YTMUSIC_API_URL: &str = "https://music.youtube.com/youtubei/v1";
pub const DEFAULT_OAUTH_FILE: &str = "oauth.json";

/// Loads environment variables from `.env` files.
///
/// The working directory file is read first, so its values win over the one in the
/// local data directory (`dotenv` never overrides variables that are already set).
/// Creates `{data_local_dir}/spotitube` if it does not exist yet.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or its `.env`
/// cannot be parsed. Absent `.env` files are not an error; the process environment
/// may carry everything. A malformed `.env` in the working directory only prints a
/// warning.
///
/// # Example
///
/// ```
/// use spotitube::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    if let Some(problem) = dotenv_problem(dotenv::dotenv()) {
        warning!("Cannot read .env in working directory. Err: {}", problem);
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Describes why loading a `.env` file failed, ignoring a file that does not exist.
///
/// # Returns
///
/// - `None` - the file was loaded, or there was no file to load
/// - `Some(message)` - the file exists but could not be read or parsed
pub fn dotenv_problem<T>(result: Result<T, dotenv::Error>) -> Option<String> {
    match result {
        Ok(_) => None,
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(e.to_string()),
    }
}

/// Platform-specific data directory of the application.
///
/// - Linux: `~/.local/share/spotitube`
/// - macOS: `~/Library/Application Support/spotitube`
/// - Windows: `%LOCALAPPDATA%/spotitube`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotitube");
    path
}

/// Resolved runtime configuration.
///
/// Built once at startup and handed to the clients that need it, so nothing below
/// the CLI layer reads the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub youtube_client_id: String,
    pub youtube_client_secret: String,
    pub youtube_token_url: String,
    pub ytmusic_api_url: String,
    pub oauth_file: PathBuf,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConvertError::MissingConfig`] naming the first required variable that is
    /// unset or empty: `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `YOUTUBE_CLIENT_ID`, `YOUTUBE_CLIENT_SECRET`.
    pub fn from_env() -> Res<Self> {
        Ok(Self {
            spotify_client_id: required("SPOTIFY_CLIENT_ID")?,
            spotify_client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            spotify_api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            spotify_token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            youtube_client_id: required("YOUTUBE_CLIENT_ID")?,
            youtube_client_secret: required("YOUTUBE_CLIENT_SECRET")?,
            youtube_token_url: optional("YOUTUBE_TOKEN_URL", DEFAULT_YOUTUBE_TOKEN_URL),
            ytmusic_api_url: optional("YTMUSIC_API_URL", DEFAULT_YTMUSIC_API_URL),
            oauth_file: PathBuf::from(optional("YTMUSIC_OAUTH_FILE", DEFAULT_OAUTH_FILE)),
        })
    }
}

fn required(name: &'static str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConvertError::MissingConfig(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
