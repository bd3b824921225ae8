use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hivemon::common::AppState;
use hivemon::config::Config;
use hivemon::dashboard::Dashboard;
use hivemon::hive::{HiveClient, HiveId};
use hivemon::poll;
use hivemon::prefs::Preferences;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hivemon=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hivemon...");

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(
        poll_interval_secs = config.poll_interval_seconds,
        "Configuration loaded"
    );

    // Restore persisted UI preferences (missing/corrupt file falls back to defaults)
    let prefs = Preferences::load(&config.prefs_path);

    // Create hive client
    let client = HiveClient::new(&config);
    tracing::info!("Hive client initialized");

    // Create application state around the restored selection
    let dashboard = Dashboard::new(HiveId::Hive1, prefs.window, prefs.controls);
    let state = AppState::new(config, client, dashboard);

    // Spawn the background poll loop (fire-and-forget, non-blocking)
    tracing::info!("Spawning poll loop...");
    tokio::spawn(poll::scheduler::run_poll_loop(state.clone()));

    shutdown_signal().await;

    // Persist UI preferences on the way out
    let dashboard = state.dashboard.read().await;
    let updated = Preferences {
        dark_mode: prefs.dark_mode,
        window: dashboard.window(),
        selected_series: prefs.selected_series.clone(),
        controls: dashboard.controls(),
    };
    if let Err(e) = updated.save(&state.config.prefs_path) {
        tracing::warn!(error = %e, "Failed to save preferences");
    }

    tracing::info!("Shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
