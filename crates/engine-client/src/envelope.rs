//! Request and response envelopes of the engine's JSON-RPC dialect.
//!
//! A request is `{"method": .., "params": [..], "id": ..}` where `params` is
//! always a positional array. A response is `{"error": .., "result": ..}`
//! where `error` is `null` on success.

use crate::error::{Error, RpcError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};


/// Converts a parameter value into the positional arguments sent on the wire.
///
/// - `()`, `None` and `null` produce no arguments.
/// - Sequences and tuples produce their elements in order.
/// - Structs and maps produce their field values in declaration order.
/// - Any other value becomes a single argument.
///
/// # Errors
/// Returns [`Error::Extraction`] if the value cannot be represented as JSON.
pub fn extract_arguments<P>(params: &P) -> Result<Vec<Value>, Error>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(|e| Error::Extraction(e.to_string()))?;

    let args = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(fields) => fields.into_iter().map(|(_, v)| v).collect(),
        scalar => vec![scalar],
    };

    Ok(args)
}

/// Outgoing request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request<'a> {
    /// Remote procedure name, e.g. `"balance.query"`.
    pub method: &'a str,
    /// Positional arguments.
    pub params: Vec<Value>,
    /// Correlation id, used for log correlation only.
    pub id: i32,
}

impl<'a> Request<'a> {
    /// Builds an envelope, extracting positional arguments from `params`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRequest`] for an empty method name and
    /// [`Error::Extraction`] if the parameters cannot be converted.
    pub fn new<P>(method: &'a str, params: &P, id: i32) -> Result<Self, Error>
    where
        P: Serialize + ?Sized,
    {
        if method.is_empty() {
            return Err(Error::InvalidRequest(
                "method name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            method,
            params: extract_arguments(params)?,
            id,
        })
    }

    /// Encodes the envelope as JSON bytes.
    ///
    /// # Errors
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::Serialization)
    }
}

/// Incoming response envelope with the result left undecoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    /// Application error, `None` when the call succeeded.
    #[serde(default)]
    pub error: Option<RpcError>,
    /// Raw result payload.
    #[serde(default)]
    pub result: Value,
}

impl Response {
    /// Parses an envelope from raw response bytes.
    ///
    /// # Errors
    /// Returns [`Error::Decode`] if the bytes are not a JSON envelope.
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(Error::Decode)
    }

    /// Resolves the envelope into a typed result.
    ///
    /// An embedded application error wins over everything else. Otherwise
    /// the result is decoded as `R`, and only a cleanly decoded result is
    /// checked against the HTTP status.
    ///
    /// # Errors
    /// Returns [`Error::Rpc`], [`Error::Decode`] or [`Error::Status`].
    pub fn into_result<R: DeserializeOwned>(self, status: StatusCode) -> Result<R, Error> {
        if let Some(err) = self.error {
            return Err(Error::Rpc(err));
        }

        let result = serde_json::from_value(self.result).map_err(Error::Decode)?;

        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        Ok(result)
    }
}

/// Decodes raw response bytes into a typed result.
///
/// The body is always decoded before the status is looked at, so an error
/// body sent with a 5xx status still surfaces as [`Error::Rpc`].
///
/// # Errors
/// See [`Response::parse`] and [`Response::into_result`].
pub fn decode_response<R: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<R, Error> {
    Response::parse(body)?.into_result(status)
}

/// Generator of correlation ids.
///
/// Seeded with the current unix time truncated to 32 bits and incremented on
/// every call, wrapping on overflow. Clones share the same counter.
#[derive(Debug, Clone)]
pub struct RequestIds {
    next: Arc<AtomicI32>,
}

impl RequestIds {
    /// Creates a generator seeded from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::starting_at(chrono::Utc::now().timestamp() as i32)
    }

    /// Creates a generator whose first id is `seed`.
    #[must_use]
    pub fn starting_at(seed: i32) -> Self {
        Self {
            next: Arc::new(AtomicI32::new(seed)),
        }
    }

    /// Returns the next correlation id.
    pub fn next_id(&self) -> i32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RequestIds {
    fn default() -> Self {
        Self::from_clock()
    }
}
