//! Command-line arguments.

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed on argument errors.
pub const USAGE: &str = "usage: engine-rpc <config.toml> <method> [params-json]";

/// Argument error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required argument is missing.
    #[error("missing argument: {}; {}", .0, USAGE)]
    Missing(&'static str),
    /// Unexpected extra arguments.
    #[error("unexpected argument: {}; {}", .0, USAGE)]
    Unexpected(String),
    /// The parameters are not valid JSON.
    #[error("params must be valid JSON: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

/// A single invocation of the tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Path to the TOML configuration file.
    pub config_path: PathBuf,
    /// Remote method name.
    pub method: String,
    /// Call parameters, `null` when omitted.
    pub params: Value,
}

impl Invocation {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    /// Returns error if arguments are missing, superfluous or malformed.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let config_path = args.next().ok_or(CliError::Missing("config path"))?;
        let method = args.next().ok_or(CliError::Missing("method"))?;
        let params = match args.next() {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Value::Null,
        };

        if let Some(extra) = args.next() {
            return Err(CliError::Unexpected(extra));
        }

        Ok(Self {
            config_path: PathBuf::from(config_path),
            method,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_invocation_with_params() {
        let invocation =
            Invocation::from_args(args(&["engine.toml", "balance.query", "[1, \"BTC\"]"]))
                .expect("should parse");

        assert_eq!(invocation.config_path, PathBuf::from("engine.toml"));
        assert_eq!(invocation.method, "balance.query");
        assert_eq!(invocation.params, json!([1, "BTC"]));
    }

    #[test]
    fn test_invocation_without_params() {
        let invocation =
            Invocation::from_args(args(&["engine.toml", "market.list"])).expect("should parse");

        assert_eq!(invocation.params, Value::Null);
    }

    #[test]
    fn test_invocation_missing_method() {
        let result = Invocation::from_args(args(&["engine.toml"]));
        assert!(matches!(result, Err(CliError::Missing("method"))));
    }

    #[test]
    fn test_invocation_missing_everything() {
        let result = Invocation::from_args(Vec::new());
        assert!(matches!(result, Err(CliError::Missing("config path"))));
    }

    #[test]
    fn test_invocation_invalid_params() {
        let result = Invocation::from_args(args(&["engine.toml", "market.last", "{BTCUSDT"]));
        assert!(matches!(result, Err(CliError::InvalidParams(_))));
    }

    #[test]
    fn test_invocation_extra_argument() {
        let result = Invocation::from_args(args(&["engine.toml", "market.last", "[]", "extra"]));
        assert!(matches!(result, Err(CliError::Unexpected(_))));
    }
}
