//! News search proxy.
//!
//! ```text
//!   Client                    news-proxy                        Providers
//!   ──────                    ──────────                        ─────────
//!   GET /api/newsapi ──▶ request id → query → Forwarder ──▶ newsapi.org
//!   GET /api/gnews   ──▶ request id → query → Forwarder ──▶ gnews.io
//!   JSON, unchanged  ◀── response ◀──────────────────────── JSON
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use news_proxy::config::load_config;
use news_proxy::lifecycle::shutdown_signal;
use news_proxy::observability::{logging, metrics};
use news_proxy::HttpServer;

#[derive(Parser)]
#[command(name = "news-proxy", version)]
#[command(about = "Forwards news searches to NewsAPI and GNews with server-held keys", long_about = None)]
struct Cli {
    /// Optional TOML configuration file. Keys may also come from NEWSAPI_KEY and GNEWS_KEY.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("news-proxy: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        newsapi = %config.providers.newsapi.base_url,
        gnews = %config.providers.gnews.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .inspect_err(|e| {
            tracing::error!(address = %config.listener.bind_address, error = %e, "Failed to bind listener");
        })?;

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
