//! File download operations with atomic writes and streaming
//!
//! This module handles single-file transfers: the response body is
//! streamed to a temporary file which is atomically renamed into place
//! once complete, so an interrupted transfer never leaves a truncated
//! file at the final path. Downloads always materialize real files; no
//! symlink or cache-pointer shortcuts are used.

use std::path::Path;

use futures::StreamExt;
use reqwest::StatusCode;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::constants::files;
use crate::errors::{DownloadError, DownloadResult};

/// File download operations handler
pub struct DownloadHandler<'a> {
    client: &'a reqwest::Client,
}

impl<'a> DownloadHandler<'a> {
    /// Creates a new DownloadHandler backed by the given HTTP client
    pub fn new(client: &'a reqwest::Client) -> Self {
        Self { client }
    }

    /// Downloads one file to the specified path
    ///
    /// Parent directories are created as needed (manifest entries may be
    /// nested paths). The transfer is a single request; there is no retry
    /// and a failure propagates to the caller immediately.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to download from
    /// * `destination` - The final path to save the file to
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the HTTP request fails, the server
    /// answers with an error status, or file I/O fails.
    pub async fn download_file(&self, url: &Url, destination: &Path) -> DownloadResult<()> {
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = destination.with_extension(format!(
            "{}{}",
            destination
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or(""),
            files::TEMP_FILE_SUFFIX
        ));

        match self.download_to_temp(url, &temp_path).await {
            Ok(()) => {
                tokio::fs::rename(&temp_path, destination).await.map_err(|_e| {
                    DownloadError::AtomicOperationFailed {
                        temp_path: temp_path.clone(),
                        final_path: destination.to_path_buf(),
                    }
                })?;
                tracing::info!("Successfully downloaded: {}", destination.display());
                Ok(())
            }
            Err(e) => {
                // Do not leave partial temp files behind on failure
                if temp_path.exists() {
                    let _ = tokio::fs::remove_file(&temp_path).await;
                }
                Err(e)
            }
        }
    }

    /// Streams the response body into a temporary file
    async fn download_to_temp(&self, url: &Url, temp_path: &Path) -> DownloadResult<()> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(DownloadError::Http)?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(DownloadError::NotFound {
                    url: url.to_string(),
                })
            }
            status if !status.is_success() => {
                return Err(DownloadError::ServerError {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        let mut file = File::create(temp_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(DownloadError::Http)?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
