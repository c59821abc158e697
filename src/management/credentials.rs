use std::path::{Path, PathBuf};

use crate::{Res, error::ConvertError, types::CredentialRecord};

/// Flat JSON file holding the YouTube Music OAuth credential.
///
/// The file is produced by an external authentication step and rewritten in full
/// whenever the access token is refreshed. There is no locking at this level;
/// [`super::TokenManager`] is the single writer within a process.
///
/// # File Format
///
/// ```json
/// {
///     "access_token": "ya29.a0...",
///     "refresh_token": "1//0g...",
///     "expires_at": 1700000000
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store for the credential file at `path`.
    ///
    /// Nothing is read or created until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the credential file, relative paths resolve against
    ///   the working directory
    ///
    /// # Example
    ///
    /// ```
    /// let store = CredentialStore::new("oauth.json");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the credential file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the credential record from disk.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::CredentialsMissing`] if the file does not exist; the user
    ///   has to run the YouTube Music authentication first
    /// - [`ConvertError::Io`] if the file cannot be read
    /// - [`ConvertError::Json`] if the file is not a valid credential record
    ///
    /// # Example
    ///
    /// ```
    /// let record = CredentialStore::new("oauth.json").load().await?;
    /// println!("token expires at {}", record.expires_at);
    /// ```
    pub async fn load(&self) -> Res<CredentialRecord> {
        if !self.exists() {
            return Err(ConvertError::CredentialsMissing {
                path: self.path.clone(),
            });
        }

        let content = async_fs::read_to_string(&self.path).await?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Overwrites the credential file with `record` as pretty-printed JSON.
    ///
    /// Missing parent directories are created. The whole file is rewritten; there
    /// is no protection against partial writes.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Io`] if the directory or file cannot be written.
    pub async fn save(&self, record: &CredentialRecord) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
