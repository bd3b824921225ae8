use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dashboard::Controls;
use crate::error::{AppError, AppResult};
use crate::pipeline::TimeWindow;

/// Which chart series are plotted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesToggles {
    pub avg_temperature: bool,
    pub humidity: bool,
    #[serde(rename = "tempDHT1")]
    pub temp_dht1: bool,
    #[serde(rename = "tempDHT2")]
    pub temp_dht2: bool,
    #[serde(rename = "tempDHT3")]
    pub temp_dht3: bool,
}

impl Default for SeriesToggles {
    fn default() -> Self {
        Self {
            avg_temperature: true,
            humidity: true,
            temp_dht1: true,
            temp_dht2: true,
            temp_dht3: true,
        }
    }
}

/// UI preferences persisted between runs: dark mode, the last recency window,
/// the plotted series, and the manual-control toggle states. A JSON blob on
/// disk; not part of the pipeline's functional contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
    pub window: TimeWindow,
    pub selected_series: SeriesToggles,
    pub controls: Controls,
}

impl Preferences {
    /// Load preferences from `path`, falling back to defaults when the file
    /// is missing or unreadable. A corrupt prefs file must never block
    /// startup.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring corrupt preferences file"
                );
                Self::default()
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "No preferences file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist preferences as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prefs` if serialization or the write fails.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Prefs(format!("Failed to serialize: {e}")))?;
        fs::write(path, contents)
            .map_err(|e| AppError::Prefs(format!("Failed to write {}: {e}", path.display())))
    }
}
