//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to reach the availability service.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - reqwest's default redirect policy and no request timeout override
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
