//! Credential management for Hub authentication
//!
//! The access token is a pre-provisioned value: it is read from the
//! `HF_TOKEN` environment variable (optionally populated from a `.env`
//! file at startup) and never prompted for or rotated by this tool.

use std::env;
use std::path::Path;

use crate::constants::env as env_constants;
use crate::errors::{AuthError, AuthResult};

/// Authentication status information
#[derive(Debug, Clone)]
pub struct AuthStatus {
    /// Whether the token environment variable is set
    pub token_set: bool,
    /// Whether a .env file exists in the current directory
    pub dotenv_file_exists: bool,
}

impl AuthStatus {
    /// Get descriptive status message for display
    pub fn status_message(&self) -> String {
        match (self.token_set, self.dotenv_file_exists) {
            (true, _) => "Token configured".to_string(),
            (false, true) => {
                "Token missing - .env file exists but does not set HF_TOKEN".to_string()
            }
            (false, false) => {
                "Token missing - set HF_TOKEN or add it to a .env file".to_string()
            }
        }
    }
}

/// Check current authentication status
pub fn get_auth_status() -> AuthStatus {
    AuthStatus {
        token_set: env::var(env_constants::TOKEN).is_ok(),
        dotenv_file_exists: Path::new(".env").exists(),
    }
}

/// Load the access token from the environment
///
/// # Errors
///
/// Returns `AuthError::MissingToken` if the variable is unset or blank.
pub fn load_token() -> AuthResult<String> {
    load_token_from(env_constants::TOKEN)
}

/// Load a token from a named environment variable
pub(crate) fn load_token_from(var: &str) -> AuthResult<String> {
    let token = env::var(var).map_err(|_| AuthError::MissingToken)?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Mask a token for logs and status output
///
/// Keeps enough of the prefix to recognize which token is configured
/// without ever writing the secret itself.
pub fn masked_token(token: &str) -> String {
    if token.len() <= 8 {
        return "****".to_string();
    }
    format!("{}****{}", &token[..4], &token[token.len() - 2..])
}
