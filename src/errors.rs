//! Error types for Hub Fetcher
//!
//! This module defines the error types for all components of the application.
//! Errors are designed to be actionable and provide clear context for
//! debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing environment variable for the access token
    #[error("Missing Hugging Face token. Set the HF_TOKEN environment variable or add it to a .env file")]
    MissingToken,

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Token contains characters that cannot appear in an HTTP header
    #[error("Access token contains invalid characters")]
    MalformedToken,

    /// HTTP request failed during authentication
    #[error("HTTP request failed during authentication")]
    Http(#[from] reqwest::Error),

    /// Token rejected by the Hub
    #[error("Hugging Face rejected the access token. Please check HF_TOKEN and try again")]
    TokenRejected,
}

/// Repository metadata query errors
#[derive(Error, Debug)]
pub enum MetadataError {
    /// HTTP request error
    #[error("HTTP request failed while querying repository metadata")]
    Http(#[from] reqwest::Error),

    /// Repository does not exist (or is not visible to this token)
    #[error("Repository not found: {repo_id}")]
    RepoNotFound { repo_id: String },

    /// Token lacks permission to read the repository
    #[error("Access denied to repository: {repo_id}")]
    AccessDenied { repo_id: String },

    /// Server returned an unexpected error status
    #[error("Server error while querying metadata: HTTP {status}")]
    ServerError { status: u16 },

    /// Metadata response could not be parsed
    #[error("Failed to parse repository metadata")]
    JsonParse(#[from] serde_json::Error),

    /// Metadata endpoint URL could not be constructed
    #[error("Invalid metadata URL for repository: {repo_id}")]
    InvalidUrl { repo_id: String },
}

/// File transfer errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request error
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// I/O error during file operations
    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    /// Remote file missing despite being listed in the manifest
    #[error("File not found on server: {url}")]
    NotFound { url: String },

    /// Server returned error status
    #[error("Server error: HTTP {status}")]
    ServerError { status: u16 },

    /// Download URL could not be constructed
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },

    /// Manifest entry names a path that would land outside the output directory
    #[error("Unsafe file path in manifest: {path}")]
    InvalidPath { path: String },

    /// Atomic file operation failed
    #[error("Atomic file operation failed: could not rename {temp_path} to {final_path}")]
    AtomicOperationFailed {
        temp_path: PathBuf,
        final_path: PathBuf,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid command-line input, caught before any I/O
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Metadata query error
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// File transfer error
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create an invalid-argument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "argument",
            AppError::Auth(_) => "authentication",
            AppError::Metadata(_) => "metadata",
            AppError::Download(_) => "download",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Authentication result type alias
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Metadata result type alias
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

/// Download result type alias
pub type DownloadResult<T> = std::result::Result<T, DownloadError>;
