//! Core application logic for Hub Fetcher
//!
//! This module contains the main application components: the
//! authenticated Hub client, the repository data model, and the fetch
//! orchestration primitives.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hub_fetcher::app::{HubSession, RepoDescriptor, RepoType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Authenticate and describe a repository
//! let session = HubSession::authenticate("hf_...").await?;
//! let repo = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
//! let manifest = session.repo_info(&repo).await?;
//!
//! for entry in manifest.iter() {
//!     println!("{} ({:?})", entry.rfilename, entry.size);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod fetch;
pub mod models;

// Re-export main public API
pub use client::{ClientConfig, HubSession};
pub use fetch::{prepare_local_dir, transfer_loop, TransferTotals};
pub use models::{FileEntry, FileSize, InvalidRepoType, RepoDescriptor, RepoManifest, RepoType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = ClientConfig::default();
        assert!(config.tcp_nodelay);

        let repo = RepoDescriptor::new("org/repo", RepoType::Model);
        assert_eq!(repo.local_dir_name(), "org_repo");
    }
}
