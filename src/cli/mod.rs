//! # CLI Module
//!
//! User-facing commands of SpotiTube. Each command loads the [`crate::config::Settings`],
//! builds the service clients, and turns library errors into colored output. Fatal
//! errors end the process through the crate's `error!` macro.
//!
//! ## Commands
//!
//! - [`convert`] - converts one Spotify playlist into a YouTube Music playlist,
//!   prompting for the URL when none was given
//! - [`token`] - shows the state of the stored YouTube Music credential and can
//!   force a refresh
//!
//! ## Usage
//!
//! ```bash
//! spotitube convert https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! spotitube convert --open          # prompt for the URL, open the result
//! spotitube token --refresh
//! ```

mod convert;
mod token;

pub use convert::convert;
pub use token::token;
