use std::time::Duration;
use tokio::time::interval;

use crate::common::AppState;
use crate::poll::worker;

/// Run the fetch cycle on a fixed cadence, forever.
///
/// Failures are non-fatal: the previous data stays displayed and the next
/// tick retries. The fixed interval is the only retry mechanism.
pub async fn run_poll_loop(state: AppState) {
    let interval_secs = state.config.poll_interval_seconds;

    tracing::info!(interval_secs, "Starting hive poll scheduler");

    let mut ticker = interval(Duration::from_secs(interval_secs));

    // Run initial fetch immediately
    ticker.tick().await;

    loop {
        match worker::refresh_dashboard(&state).await {
            Ok(()) => {
                let dashboard = state.dashboard.read().await;
                if let Some(latest) = dashboard.latest() {
                    tracing::info!(
                        time = %latest.display_time,
                        temperature = latest.avg_temperature,
                        humidity = latest.humidity,
                        flap = %latest.flap_status,
                        "Latest reading"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Poll cycle failed, keeping previous data");
            }
        }

        // Wait for next tick
        ticker.tick().await;
    }
}
