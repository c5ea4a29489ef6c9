pub mod analytics;
pub mod api;
pub mod config;
pub mod core_state;
pub mod forms;
pub mod listing;
pub mod models;
pub mod notify;
pub mod remote;
pub mod store;
pub mod sync;
pub mod views;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::core_state::CoreState;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    runtime.block_on(serve());
}

async fn serve() {
    let remote = config::RemoteConfig::from_env();
    if !remote.is_configured() {
        tracing::info!("Remote store not configured; running on local data only");
    }
    let core = Arc::new(CoreState::new(remote));

    // Initial load runs off the runtime; the dashboard is usable meanwhile.
    let loader = Arc::clone(&core);
    tokio::task::spawn_blocking(move || match sync::load_from_remote(&loader) {
        Ok(outcome) => tracing::debug!(?outcome, "Initial load finished"),
        Err(e) => tracing::error!("Initial load failed: {e}"),
    });

    let clock = views::clock::spawn_clock_refresh(Arc::clone(&core));

    let mut server =
        match api::start_dashboard_server(core, config::api_bind_addr(), config::static_dir())
            .await
        {
            Ok(server) => server,
            Err(e) => {
                tracing::error!("{e}");
                clock.abort();
                return;
            }
        };

    tracing::info!(addr = %server.session.server_addr, "Dashboard ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
    }

    server.shutdown();
    clock.abort();
}
