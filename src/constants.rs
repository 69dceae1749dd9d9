//! Application constants for Hub Fetcher
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names for authentication
pub mod env {
    /// Environment variable name for the Hugging Face access token
    pub const TOKEN: &str = "HF_TOKEN";
}

/// Hugging Face Hub service URLs and endpoints
pub mod hub {
    /// Hub base URL
    pub const BASE_URL: &str = "https://huggingface.co";

    /// API path segment for model repository metadata
    pub const API_MODELS_PATH: &str = "api/models";

    /// API path segment for dataset repository metadata
    pub const API_DATASETS_PATH: &str = "api/datasets";

    /// Endpoint used to verify that an access token is valid
    pub const WHOAMI_PATH: &str = "api/whoami-v2";

    /// Revision used when resolving file downloads
    pub const DEFAULT_REVISION: &str = "main";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = concat!("hub-fetcher/", env!("CARGO_PKG_VERSION"));

    /// Default HTTP request timeout (large files need generous limits)
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 8;

    /// TCP keep-alive interval
    pub const TCP_KEEPALIVE: Duration = Duration::from_secs(30);
}

/// File operation constants
pub mod files {
    /// Temporary file suffix for atomic operations
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";

    /// Default base output directory when none is given on the command line
    pub const DEFAULT_OUTPUT_DIR: &str = "downloads";
}

/// Progress reporting constants
pub mod progress {
    /// Template for the byte-based progress bar
    pub const BAR_TEMPLATE: &str =
        "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

    /// Characters used to draw the progress bar
    pub const BAR_CHARS: &str = "#>-";

    /// Message shown next to the bar while transfers are running
    pub const BAR_MESSAGE: &str = "Downloading";
}

// Re-export commonly used constants for convenience
pub use env::TOKEN as ENV_TOKEN;
pub use files::{DEFAULT_OUTPUT_DIR, TEMP_FILE_SUFFIX};
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
pub use hub::BASE_URL as HUB_BASE_URL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_urls_are_absolute() {
        assert!(hub::BASE_URL.starts_with("https://"));
        assert!(!hub::API_MODELS_PATH.starts_with('/'));
        assert!(!hub::API_DATASETS_PATH.starts_with('/'));
    }

    #[test]
    fn test_user_agent_identifies_tool() {
        assert!(USER_AGENT.starts_with("hub-fetcher/"));
    }
}
