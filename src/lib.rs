//! Hub Fetcher Library
//!
//! A Rust library for downloading Hugging Face Hub repositories (models
//! and datasets) file by file, with explicit session handling and
//! aggregate byte progress.

pub mod app;
pub mod auth;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(ENV_TOKEN, "HF_TOKEN");
        assert!(USER_AGENT.contains("hub-fetcher"));
        assert_eq!(DEFAULT_OUTPUT_DIR, "downloads");
    }

    #[test]
    fn test_error_types() {
        let auth_error = errors::AuthError::TokenRejected;
        let app_error = AppError::Auth(auth_error);

        assert_eq!(app_error.category(), "authentication");
    }
}
