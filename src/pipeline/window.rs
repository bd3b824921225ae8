use serde::{Deserialize, Serialize};

use crate::pipeline::normalize::SensorReading;

/// Upper bound on plotted points per series. Applied after time filtering,
/// never before.
pub const MAX_POINTS: usize = 100;

/// Recency window used to filter the displayed series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    SixHours,
    TwelveHours,
    OneWeek,
    All,
}

impl TimeWindow {
    /// Window duration in milliseconds; `None` means keep everything.
    #[must_use]
    pub const fn duration_millis(self) -> Option<i64> {
        match self {
            Self::SixHours => Some(21_600_000),
            Self::TwelveHours => Some(43_200_000),
            Self::OneWeek => Some(604_800_000),
            Self::All => None,
        }
    }
}

/// Reduce a normalized series (ordered oldest→newest) to the requested
/// recency window, then cap it to the most recent [`MAX_POINTS`] entries.
///
/// The cutoff is anchored to the newest timestamp in the series, not the wall
/// clock, so a rig that stopped reporting hours ago still shows its final
/// window of data. Empty input skips the cutoff computation entirely.
#[must_use]
pub fn apply_window(series: &[SensorReading], window: TimeWindow) -> Vec<SensorReading> {
    if series.is_empty() {
        return Vec::new();
    }

    let kept: Vec<SensorReading> = match window.duration_millis() {
        Some(duration) => {
            let newest = series
                .iter()
                .map(|r| r.timestamp_millis)
                .max()
                .unwrap_or_default();
            let cutoff = newest - duration;
            series
                .iter()
                .filter(|r| r.timestamp_millis >= cutoff)
                .cloned()
                .collect()
        }
        None => series.to_vec(),
    };

    let excess = kept.len().saturating_sub(MAX_POINTS);
    kept[excess..].to_vec()
}
