//! Engine RPC command-line client
//!
//! Performs a single call against the trading engine and prints the result.

use engine_client::{EngineClient, Method};
use engine_rpc::cli::Invocation;
use engine_rpc::config::Config;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let invocation = Invocation::from_args(std::env::args().skip(1))?;
    let config = Config::load(&invocation.config_path)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match invocation.method.parse::<Method>() {
        Ok(method) => debug!(%method, "calling catalogued method"),
        Err(e) => info!("{}, sending as given", e),
    }

    let client = EngineClient::new(config.engine.client_config())?;
    info!("Calling {} on {}", invocation.method, client.url());

    let result: Value = client.call(&invocation.method, &invocation.params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
