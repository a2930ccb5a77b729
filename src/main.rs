use clap::Parser;
use fundnet_api::RestApi;
use fundnet_store::DatasetStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Backend API for the fundnet network explorer
#[derive(Parser, Debug)]
#[command(name = "fundnet")]
#[command(about = "Funding-network explorer backend", long_about = None)]
struct Args {
    /// Path to the network dataset file
    #[arg(short, long, default_value = "./data/network.json")]
    dataset: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fundnet v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset file: {:?}", args.dataset);
    info!("HTTP API port: {}", args.http_port);

    let store = Arc::new(DatasetStore::open(&args.dataset));
    if !store.is_loaded() {
        // Not fatal: the API keeps serving and reports the condition
        // per request until a reload succeeds.
        warn!("No dataset loaded; graph endpoints will report a load error");
    }

    info!("HTTP API: http://localhost:{}/api/health", args.http_port);
    info!("  - Network view:       GET  /api/network");
    info!("  - Pathway tracing:    POST /api/analysis/pathways");
    info!("  - Centrality:         POST /api/analysis/centrality");
    info!("  - Communities:        POST /api/analysis/communities");

    RestApi::start(store, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
