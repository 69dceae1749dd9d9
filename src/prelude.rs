//! Prelude module for the Hub Fetcher library
//!
//! Re-exports the most commonly used items so typical integrations need a
//! single `use hub_fetcher::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hub_fetcher::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let token = load_token()?;
//!     let session = HubSession::authenticate(&token).await?;
//!     let repo = RepoDescriptor::new("google/flan-t5-xxl", RepoType::Model);
//!     let manifest = session.repo_info(&repo).await?;
//!     println!("{} files", manifest.len());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Essential app components
pub use crate::app::{
    ClientConfig, FileEntry, FileSize, HubSession, RepoDescriptor, RepoManifest, RepoType,
    TransferTotals, prepare_local_dir, transfer_loop,
};

// Authentication functions
pub use crate::auth::{get_auth_status, load_token, masked_token, AuthStatus};

// Commonly used constants
pub use crate::constants::{DEFAULT_OUTPUT_DIR, ENV_TOKEN, HUB_BASE_URL, USER_AGENT};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        // Verify that all essential types are available through prelude
        let _config = ClientConfig::default();
        let repo = RepoDescriptor::new("org/repo", RepoType::Dataset);
        assert_eq!(repo.local_dir(Path::new("out")), PathBuf::from("out/org_repo"));

        // Auth functions are available
        let _status = get_auth_status();
        assert_eq!(masked_token("short"), "****");

        // Constants are available
        assert_eq!(ENV_TOKEN, "HF_TOKEN");
        assert!(HUB_BASE_URL.contains("huggingface.co"));
    }
}
