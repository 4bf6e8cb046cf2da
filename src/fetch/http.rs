//! reqwest-backed fetcher
//!
//! This module handles all real HTTP traffic, including:
//! - Building the HTTP client with the configured user agent and timeouts
//! - Issuing GET requests (redirects are followed up to the configured limit)
//! - Classifying transport errors

use crate::config::{OutboundConfig, UserAgentConfig};
use crate::fetch::{Fetch, FetchResponse};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `outbound` - Timeouts and redirect limit
/// * `user_agent` - The user agent identification
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_lens::config::{OutboundConfig, UserAgentConfig};
/// use sumi_lens::fetch::build_http_client;
///
/// let client = build_http_client(&OutboundConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    outbound: &OutboundConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_millis(outbound.request_timeout))
        .connect_timeout(Duration::from_millis(outbound.connect_timeout))
        .redirect(Policy::limited(outbound.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production [`Fetch`] implementation
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(
        outbound: &OutboundConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(build_http_client(outbound, user_agent)?))
    }

    /// Wraps an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        match self.client.get(url).send().await {
            Ok(response) => Ok(FetchResponse::streaming(response)),
            Err(e) => Err(classify_error(url, e)),
        }
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
