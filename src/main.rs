//! Expiring Store - interactive shell
//!
//! Reads store commands from stdin and prints replies to stdout.

use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expiring_store::shell::run_until_shutdown;
use expiring_store::{Config, ExpiringStore};

/// Main entry point for the expiring store shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the store
/// 4. Run the shell until end of input, QUIT, Ctrl+C or SIGTERM
///
/// The runtime is built by hand so it can be shut down without waiting on a
/// stdin read still parked in the blocking pool.
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expiring_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run());
    runtime.shutdown_background();
    result
}

async fn run() -> anyhow::Result<()> {
    info!("Starting expiring store shell");

    let config = Config::from_env();
    info!(
        "Configuration loaded: initial_capacity={}, shard_amount={:?}",
        config.initial_capacity, config.shard_amount
    );

    let store = ExpiringStore::from_config(&config);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    run_until_shutdown(&store, stdin, stdout, shutdown_signal()).await?;

    info!(
        "Shutdown complete: {} entries ({} active) discarded",
        store.count_all(),
        store.count_active()
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
