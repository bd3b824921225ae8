use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One monitored beehive enclosure. The rig supports exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiveId {
    Hive1,
    Hive2,
}

impl HiveId {
    pub const ALL: [Self; 2] = [Self::Hive1, Self::Hive2];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hive1 => "Beehive 1",
            Self::Hive2 => "Beehive 2",
        }
    }
}

impl fmt::Display for HiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row as delivered by the spreadsheet-backed endpoint.
///
/// Field presence, naming, and value types vary across endpoint revisions
/// (numbers arrive as strings, relay states as `"on"`/`"off"`, sensor columns
/// under either short keys or full spreadsheet headers), so this stays an open
/// key/value bag and every accessor tolerates absence or a wrong type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Map<String, Value>);

impl RawRecord {
    /// First present key's value as a string slice.
    #[must_use]
    pub fn text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.0.get(*key))
            .and_then(Value::as_str)
    }

    /// First key holding a parseable, finite float.
    ///
    /// Accepts JSON numbers and numeric strings; when no alias yields one
    /// (absent fields, non-numeric strings, infinities) this normalizes to
    /// `0.0`.
    #[must_use]
    pub fn number(&self, keys: &[&str]) -> f64 {
        let parsed = keys.iter().find_map(|key| match self.0.get(*key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        });

        match parsed {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}
