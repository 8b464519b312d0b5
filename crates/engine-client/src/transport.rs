//! Transport layer: one POST per call.

use crate::error::Error;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use url::Url;


/// Raw outcome of a single round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Fully read response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response from a status and body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends an encoded request and returns the raw response.
///
/// Implementations must be safe to share between tasks; every call is
/// independent of every other.
pub trait Transport: Send + Sync {
    /// Posts `body` to the endpoint and reads the full response.
    fn send(&self, body: Vec<u8>) -> impl Future<Output = Result<TransportResponse, Error>> + Send;
}

/// HTTP transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    /// Creates a transport posting to `url`.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, body: Vec<u8>) -> Result<TransportResponse, Error> {
        let resp = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
