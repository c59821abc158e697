//! Build script for SpotiTube.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory so a ready-to-edit example sits next to the place where the CLI looks
//! for its `.env` file.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the platform-specific data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/spotitube/.env.example`
/// - macOS: `~/Library/Application Support/spotitube/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotitube/.env.example`
///
/// Missing templates and unwritable data directories only produce a cargo warning;
/// the build itself never fails because of the template.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotitube");

    let copied = fs::create_dir_all(&out_dir).and_then(|_| {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)
    });

    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
