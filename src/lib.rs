//! SpotiTube Library
//!
//! This library converts public Spotify playlists into YouTube Music playlists. It
//! reads ordered track metadata from the Spotify Web API, resolves every track to the
//! first matching song on YouTube Music, and creates a populated playlist there. The
//! YouTube Music OAuth credential is kept fresh through refresh-token exchange.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `convert` - Conversion orchestrator sequencing reader, resolver and writer
//! - `error` - Error taxonomy shared by every layer
//! - `management` - Credential file storage and access token lifecycle
//! - `spotify` - Spotify Web API client (source side)
//! - `types` - Data structures and type definitions
//! - `ytmusic` - YouTube Music InnerTube client (destination side)
//!
//! # Example
//!
//! ```
//! use spotitube::config;
//!
//! #[tokio::main]
//! async fn main() -> spotitube::Res<()> {
//!     config::load_env().await.ok();
//!     let settings = config::Settings::from_env()?;
//!     // Build clients and run a Converter...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod ytmusic;

/// Result alias used throughout the crate.
///
/// Every fallible operation reports a [`error::ConvertError`], which carries a
/// human-readable message suitable for showing directly to the user.
pub type Res<T> = std::result::Result<T, error::ConvertError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Converting '{}' to YouTube Music...", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Access token refreshed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this macro. Library code returns a
/// [`error::ConvertError`] instead so callers decide whether a failure is fatal.
///
/// # Example
///
/// ```
/// error!("Failed to load credentials: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable conditions, such as a track without a match or an empty
/// batch that was skipped.
///
/// # Example
///
/// ```
/// warning!("No match found for '{}'", query);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
