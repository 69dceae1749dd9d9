//! Hub token verification
//!
//! This module verifies an access token against the Hub before any
//! metadata or download call is made. Verification is a single request to
//! the `whoami` endpoint using the bearer header already installed on the
//! client.

use reqwest::{Client, StatusCode};
use url::Url;

use crate::errors::{AuthError, AuthResult};

/// Handles Hub authentication operations
pub struct AuthHandler;

impl AuthHandler {
    /// Verifies that the client's token is accepted by the Hub
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client carrying the bearer token
    /// * `whoami_url` - Full URL of the token verification endpoint
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenRejected` if the Hub answers 401 or 403,
    /// or `AuthError::Http` for transport failures and other error
    /// statuses.
    pub async fn verify_token(client: &Client, whoami_url: &Url) -> AuthResult<()> {
        tracing::debug!("Verifying access token against {}", whoami_url);

        let response = client
            .get(whoami_url.as_str())
            .send()
            .await
            .map_err(AuthError::Http)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::TokenRejected),
            _ => {
                response.error_for_status().map_err(AuthError::Http)?;
                tracing::info!("Access token verified");
                Ok(())
            }
        }
    }
}
