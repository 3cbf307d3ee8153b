use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use road_ops_analyzer::client::OpenAiClient;
use road_ops_analyzer::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "road_ops_analyzer=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Configuration check failed");
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let client = Arc::new(OpenAiClient::new(&config.api_key, &config.base_url));
    let app = road_ops_analyzer::build_app(client);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🛣️ Road analysis server running on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
