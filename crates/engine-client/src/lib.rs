//! JSON-RPC over HTTP client for the trading engine.
//!
//! Every engine operation (balance queries, order placement, market data and
//! so on) is a single POST of `{"method", "params", "id"}` to the engine's
//! HTTP endpoint, answered with `{"error", "result"}`. [`EngineClient::call`]
//! implements that round trip once; callers pick the method name, the
//! parameter value and the result type.
//!
//! # Example
//!
//! ```no_run
//! use engine_client::{ClientConfig, EngineClient, Method};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct MarketLast {
//!     market: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), engine_client::Error> {
//!     let client = EngineClient::new(ClientConfig {
//!         host: "127.0.0.1".into(),
//!         port: 8080,
//!         timeout: None,
//!     })?;
//!
//!     let price: String = client
//!         .call_method(Method::MarketLast, &MarketLast { market: "BTCUSDT".into() })
//!         .await?;
//!     println!("Last price: {}", price);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! A call fails with exactly one [`Error`]. An application error embedded in
//! the response body ([`Error::Rpc`]) is reported even when the HTTP status
//! is not 200; [`Error::Status`] is only used when the body decoded cleanly
//! and carried no error.

mod client;
mod envelope;
mod error;
mod method;
mod transport;

pub use client::{ClientConfig, EngineClient};
pub use envelope::{Request, RequestIds, Response, decode_response, extract_arguments};
pub use error::{Error, RpcError};
pub use method::{Method, UnknownMethod};
pub use transport::{HttpTransport, Transport, TransportResponse};
