//! JSON-RPC client for the trading engine.

use crate::envelope::{Request, RequestIds, Response};
use crate::error::Error;
use crate::method::Method;
use crate::transport::{HttpTransport, Transport};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host name or address of the engine's HTTP endpoint.
    pub host: String,
    /// Port of the engine's HTTP endpoint.
    pub port: u16,
    /// Optional per-request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Builds the endpoint URL, `http://{host}:{port}/`.
    ///
    /// # Errors
    /// Returns error if host and port do not form a valid URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&format!("http://{}:{}/", self.host, self.port))?)
    }
}

/// Client for the engine's JSON-RPC endpoint.
///
/// Cloning is cheap: clones share the connection pool and the id counter.
/// A client may be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct EngineClient<T = HttpTransport> {
    transport: T,
    ids: RequestIds,
}

impl EngineClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let url = config.base_url()?;
        let transport = HttpTransport::new(url, config.timeout)?;

        Ok(Self::with_transport(transport))
    }

    /// Creates a new client for `host:port` with default settings.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn with_host_port(host: &str, port: u16) -> Result<Self, Error> {
        Self::new(ClientConfig {
            host: host.to_string(),
            port,
            ..Default::default()
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        self.transport.url()
    }
}

impl<T: Transport> EngineClient<T> {
    /// Creates a client on top of an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            ids: RequestIds::from_clock(),
        }
    }

    /// Replaces the correlation id generator.
    #[must_use]
    pub fn with_request_ids(mut self, ids: RequestIds) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls `method` with `params` and decodes the result as `R`.
    ///
    /// `params` is flattened into positional arguments, see
    /// [`extract_arguments`](crate::extract_arguments).
    ///
    /// # Errors
    /// Returns the first failure of the pipeline: argument extraction,
    /// encoding, transport, response decoding, an application error reported
    /// by the engine, or a non-200 status.
    pub async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let id = self.ids.next_id();
        let body = Request::new(method, params, id)?.encode()?;

        debug!(method, id, "sending RPC request");
        trace!(method, id, body = %String::from_utf8_lossy(&body), "encoded request");

        let resp = self.transport.send(body).await?;

        trace!(
            method,
            id,
            status = %resp.status,
            bytes = resp.body.len(),
            "received RPC response"
        );

        let envelope = Response::parse(&resp.body)?;

        if let Some(err) = &envelope.error {
            warn!(method, id, code = err.code, message = %err.message, "engine returned error");
        } else if resp.status != StatusCode::OK {
            warn!(method, id, status = %resp.status, "unexpected status code");
        }

        envelope.into_result(resp.status)
    }

    /// Calls a method from the catalogue.
    ///
    /// # Errors
    /// See [`EngineClient::call`].
    pub async fn call_method<P, R>(&self, method: Method, params: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(method.as_str(), params).await
    }
}
