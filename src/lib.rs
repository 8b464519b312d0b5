//! # engine-rpc
//!
//! Command-line front end for the trading engine's JSON-RPC endpoint, built
//! on the [`engine_client`] library.
//!
//! ```text
//! engine-rpc <config.toml> <method> [params-json]
//! ```
//!
//! The configuration file names the engine endpoint and the default log
//! filter:
//!
//! ```toml
//! [engine]
//! host = "127.0.0.1"
//! port = 8080
//! timeout_ms = 5000
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! `RUST_LOG` overrides the configured filter.

pub mod cli;
pub mod config;
