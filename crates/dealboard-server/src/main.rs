//! Dealboard - restaurant deals query service.
//!
//! Serves two queries over an upstream restaurant feed: deals active at a
//! given time of day, and the peak deal-availability window.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dealboard_server::{Server, ServerConfig, ServerError, DEFAULT_HOST, DEFAULT_PORT};

/// Dealboard - restaurant deals query API
#[derive(Parser, Debug)]
#[command(name = "dealboard", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Upstream feed URL
    #[arg(long, default_value = dealboard_ingest::DEFAULT_FEED_URL)]
    feed_url: String,

    /// Snapshot cache TTL in seconds
    #[arg(long, default_value_t = 60)]
    cache_ttl_secs: u64,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dealboard={},warn", log_level)));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    init_logging(&args);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        feed_url: args.feed_url,
        cache_ttl: Duration::from_secs(args.cache_ttl_secs),
    };

    let server = Server::new(config)?;
    server.run().await
}
