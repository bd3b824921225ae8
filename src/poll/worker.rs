use chrono::Local;

use crate::common::AppState;
use crate::error::AppResult;
use crate::pipeline::{SensorReading, normalize_at};

/// Run one full fetch cycle for the currently selected hive: fetch, normalize,
/// drop padding rows, window, and apply under the generation check.
///
/// # Errors
///
/// Returns an error if the fetch or decode fails; the dashboard keeps its
/// previous data in that case.
pub async fn refresh_dashboard(state: &AppState) -> AppResult<()> {
    let ticket = state.dashboard.write().await.begin_refresh();

    tracing::debug!(
        hive = %ticket.hive,
        window = ?ticket.window,
        generation = ticket.generation,
        "Fetching hive records"
    );

    let raw = state.client.fetch_records(ticket.hive).await?;
    let fetched = raw.len();

    let now = Local::now();
    let readings: Vec<SensorReading> = raw.iter().map(|r| normalize_at(r, now)).collect();

    let degraded = readings.iter().filter(|r| r.timestamp_degraded).count();
    if degraded > 0 {
        tracing::warn!(
            count = degraded,
            hive = %ticket.hive,
            "Records with malformed timestamps, substituted current time"
        );
    }

    // The sheet pads empty rows with zero readings; drop them before charting.
    let live: Vec<SensorReading> = readings.into_iter().filter(SensorReading::is_live).collect();

    let mut dashboard = state.dashboard.write().await;
    if dashboard.apply_refresh(ticket, live) {
        tracing::debug!(
            fetched,
            kept = dashboard.series().len(),
            hive = %ticket.hive,
            "Dashboard series updated"
        );
    } else {
        tracing::debug!(
            generation = ticket.generation,
            "Discarding stale fetch result"
        );
    }

    Ok(())
}
