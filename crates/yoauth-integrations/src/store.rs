use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use yoauth_core::error::{Result, YoauthError};
use yoauth_core::types::TokenRecord;

use crate::TokenStore;

/// Stores the token record as a JSON document at a single path.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    /// Read the record back verbatim. No validation is applied.
    async fn load(&self) -> Result<TokenRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(YoauthError::NotFound(self.path.clone()))
            }
            Err(e) => {
                return Err(YoauthError::Io(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            YoauthError::Serialization(format!(
                "failed to parse token file {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Overwrite the file with `record`. An incomplete record never touches the file.
    async fn persist(&self, record: &TokenRecord) -> Result<()> {
        record.validate()?;

        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| YoauthError::Serialization(format!("failed to encode token: {e}")))?;

        tracing::info!(path = %self.path.display(), "writing token");

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                YoauthError::Io(format!("failed to open {}: {e}", self.path.display()))
            })?;

        file.write_all(&bytes)
            .await
            .map_err(|e| YoauthError::Io(format!("failed to write {}: {e}", self.path.display())))?;
        file.flush()
            .await
            .map_err(|e| YoauthError::Io(format!("failed to flush {}: {e}", self.path.display())))?;

        Ok(())
    }
}
