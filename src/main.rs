use live_order_board::LiveOrderBoard;
use live_order_board::api::ApiServer;
use live_order_board::config::{Config, LogFormat};
use live_order_board::store::InMemoryOrderStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        "Live order board starting on {} (log format: {:?})",
        config.socket_addr(),
        config.log_format
    );

    // ── 1. Shared order store ──────────────────────────────────────
    let store = InMemoryOrderStore::new();

    // ── 2. Registrar + aggregator behind one handle ────────────────
    let board = LiveOrderBoard::new(Arc::new(store));

    // ── 3. Serve until Ctrl+C ──────────────────────────────────────
    ApiServer::new(board).run(config).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("live_order_board=info,tower_http=info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
