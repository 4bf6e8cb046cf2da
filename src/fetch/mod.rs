//! Outbound fetch capability
//!
//! The analyser never talks to reqwest directly. Everything outbound goes
//! through the [`Fetch`] trait so tests can substitute deterministic
//! implementations:
//! - [`HttpFetcher`] is the production implementation
//! - [`FetchResponse`] carries the status code and an unread body

mod http;

pub use http::{build_http_client, HttpFetcher};

use crate::FetchError;
use async_trait::async_trait;

/// Capability to issue a single GET request
///
/// Implementations return `Err` only for transport failures (connect,
/// timeout, TLS, ...). Any HTTP status, including 4xx and 5xx, is `Ok`.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// Response returned by a [`Fetch`] implementation
///
/// The body is not read until [`FetchResponse::into_bytes`] is called.
/// Dropping the response releases the body and its connection.
#[derive(Debug)]
pub struct FetchResponse {
    status: u16,
    body: ResponseBody,
}

#[derive(Debug)]
enum ResponseBody {
    Streaming(reqwest::Response),
    Buffered(Vec<u8>),
}

impl FetchResponse {
    /// Creates a response from an already-buffered body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: ResponseBody::Buffered(body.into()),
        }
    }

    pub(crate) fn streaming(response: reqwest::Response) -> Self {
        Self {
            status: response.status().as_u16(),
            body: ResponseBody::Streaming(response),
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reads the whole body into memory
    pub async fn into_bytes(self) -> Result<Vec<u8>, FetchError> {
        match self.body {
            ResponseBody::Buffered(bytes) => Ok(bytes),
            ResponseBody::Streaming(response) => {
                let url = response.url().to_string();
                response
                    .bytes()
                    .await
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| FetchError::Body {
                        url,
                        message: e.to_string(),
                    })
            }
        }
    }
}
