//! HTTP client implementation for Hugging Face Hub interaction
//!
//! This module provides the authenticated Hub session used for metadata
//! queries and file transfers. Authentication produces an explicit
//! [`HubSession`] value which is then threaded through every subsequent
//! call; there is no ambient or global login state.
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `auth`: access token verification
//! - `download`: single-file transfers with atomic writes

use serde::Deserialize;
use url::Url;

use crate::constants::hub;
use crate::errors::{AuthResult, DownloadResult, MetadataError, MetadataResult};

use super::models::{FileEntry, RepoDescriptor, RepoManifest};

// Module declarations
pub mod auth;
pub mod config;
pub mod download;

pub use config::ClientConfig;

use auth::AuthHandler;
use download::DownloadHandler;

/// Shape of the Hub metadata response (only the fields we consume)
#[derive(Debug, Deserialize)]
struct RepoInfoResponse {
    #[serde(default)]
    siblings: Vec<FileEntry>,
}

/// Authenticated session with the Hugging Face Hub
///
/// Created by [`HubSession::authenticate`], which verifies the token
/// before any other network activity. All metadata and download calls go
/// through the session.
#[derive(Debug)]
pub struct HubSession {
    client: reqwest::Client,
    base_url: Url,
}

impl HubSession {
    /// Authenticates against the Hub and returns a session
    ///
    /// This builds an HTTP client carrying the bearer token and verifies
    /// the token against the `whoami` endpoint. Verification failure is
    /// fatal for the whole run: no metadata query or transfer is
    /// attempted with an unverified token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the client cannot be built, the token is
    /// malformed, or the Hub rejects it.
    pub async fn authenticate(token: &str) -> AuthResult<Self> {
        Self::authenticate_with_config(token, ClientConfig::default()).await
    }

    /// Authenticates with custom client configuration
    ///
    /// # Arguments
    ///
    /// * `token` - Pre-provisioned Hub access token
    /// * `config` - Client configuration settings
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if authentication fails
    pub async fn authenticate_with_config(token: &str, config: ClientConfig) -> AuthResult<Self> {
        let client = config.build_http_client(token)?;
        let base_url = Url::parse(hub::BASE_URL).expect("Hub base URL should be valid");

        let whoami_url = base_url
            .join(hub::WHOAMI_PATH)
            .expect("whoami path should join onto the base URL");
        AuthHandler::verify_token(&client, &whoami_url).await?;

        tracing::info!("Successfully authenticated with the Hugging Face Hub");

        Ok(Self { client, base_url })
    }

    /// Queries the Hub for the file manifest of one repository
    ///
    /// This is a single metadata round-trip. Entries are returned in the
    /// order the Hub lists them.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if the repository does not exist, the
    /// token lacks access, the server errors, or the response cannot be
    /// parsed.
    pub async fn repo_info(&self, repo: &RepoDescriptor) -> MetadataResult<RepoManifest> {
        let url = self
            .base_url
            .join(&repo.metadata_path())
            .map_err(|_| MetadataError::InvalidUrl {
                repo_id: repo.repo_id.clone(),
            })?;

        tracing::debug!("Querying repository metadata: {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(MetadataError::Http)?;

        match response.status().as_u16() {
            401 | 403 => {
                return Err(MetadataError::AccessDenied {
                    repo_id: repo.repo_id.clone(),
                })
            }
            404 => {
                return Err(MetadataError::RepoNotFound {
                    repo_id: repo.repo_id.clone(),
                })
            }
            status if status >= 400 => return Err(MetadataError::ServerError { status }),
            _ => {}
        }

        let info: RepoInfoResponse = response.json().await.map_err(MetadataError::Http)?;
        let manifest = RepoManifest::new(info.siblings);

        tracing::info!(
            "Repository {} lists {} files ({} bytes reported)",
            repo,
            manifest.len(),
            manifest.total_known_bytes()
        );

        Ok(manifest)
    }

    /// Downloads one manifest entry into the given local directory
    ///
    /// The file lands at `local_dir/<rfilename>`, preserving any nested
    /// path inside the repository. Entries whose name would escape
    /// `local_dir` (absolute, or containing `..`) are rejected before
    /// any request is made. Exactly one network interaction per call.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the entry names an unsafe path, the
    /// URL cannot be built, the request fails, or file I/O fails.
    pub async fn download_file(
        &self,
        repo: &RepoDescriptor,
        entry: &FileEntry,
        local_dir: &std::path::Path,
    ) -> DownloadResult<()> {
        let destination =
            entry
                .destination(local_dir)
                .ok_or_else(|| crate::errors::DownloadError::InvalidPath {
                    path: entry.rfilename.clone(),
                })?;

        let resolve_path = repo.resolve_path(&entry.rfilename);
        let url =
            self.base_url
                .join(&resolve_path)
                .map_err(|e| crate::errors::DownloadError::InvalidUrl {
                    url: resolve_path.clone(),
                    error: e.to_string(),
                })?;

        tracing::debug!("Transferring {} -> {}", url, destination.display());

        DownloadHandler::new(&self.client)
            .download_file(&url, &destination)
            .await
    }

    /// Get the base URL for the Hub
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::RepoType;

    #[test]
    fn test_base_url_parses() {
        let base_url = Url::parse(hub::BASE_URL).unwrap();
        assert_eq!(base_url.scheme(), "https");
        assert_eq!(base_url.host_str(), Some("huggingface.co"));
    }

    #[test]
    fn test_metadata_url_construction() {
        let base_url = Url::parse(hub::BASE_URL).unwrap();
        let repo = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
        let url = base_url.join(&repo.metadata_path()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models/google/flan-t5-xxl"
        );
    }

    #[test]
    fn test_resolve_url_construction() {
        let base_url = Url::parse(hub::BASE_URL).unwrap();
        let repo = RepoDescriptor::new("squad", RepoType::Dataset);
        let url = base_url
            .join(&repo.resolve_path("plain_text/train.parquet"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/datasets/squad/resolve/main/plain_text/train.parquet"
        );
    }

    #[test]
    fn test_repo_info_response_parsing() {
        // Trimmed-down Hub payload: extra fields are ignored, sizes optional
        let body = r#"{
            "id": "google/flan-t5-xxl",
            "private": false,
            "siblings": [
                {"rfilename": "config.json", "size": 570},
                {"rfilename": "model.safetensors"}
            ]
        }"#;

        let info: RepoInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(info.siblings.len(), 2);
        assert_eq!(info.siblings[0].rfilename, "config.json");
        assert!(!info.siblings[1].size.is_known());
    }

    #[test]
    fn test_repo_info_response_without_siblings() {
        // Some error payloads omit the siblings list entirely
        let info: RepoInfoResponse = serde_json::from_str(r#"{"id": "org/empty"}"#).unwrap();
        assert!(info.siblings.is_empty());
    }
}
