use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::hive::RawRecord;

// Alias lists covering field names across endpoint revisions. Earlier keys win.
const TIME_KEYS: &[&str] = &["time", "Time", "timestamp"];
const AVG_TEMP_KEYS: &[&str] = &["avgTempDS", "avgTemperature"];
const HUMIDITY_KEYS: &[&str] = &["humidityDHT1", "humidity"];
const TEMP_DHT1_KEYS: &[&str] = &["tempDHT1", "DHT22 Sensor 1 (°C)"];
const TEMP_DHT2_KEYS: &[&str] = &["tempDHT2", "DHT22 Sensor 2 (°C)"];
const TEMP_DHT3_KEYS: &[&str] = &["tempDHT3", "DHT22 Sensor 3 (°C)"];
const DS_SENSOR4_KEYS: &[&str] = &["dsSensor4", "DS18B20 Sensor 4 (°C)"];
const DS_SENSOR5_KEYS: &[&str] = &["dsSensor5", "DS18B20 Sensor 5 (°C)"];
const DS_SENSOR6_KEYS: &[&str] = &["dsSensor6", "DS18B20 Sensor 6 (°C)"];
const RELAY_FAN1_KEYS: &[&str] = &["relayFan1"];
const RELAY_FAN2_KEYS: &[&str] = &["relayFan2"];

/// Discretized position of the servo-controlled ventilation flap, derived
/// from the average hive temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapStatus {
    Closed,
    Open25,
    Open50,
    Open75,
    FullyOpen,
}

impl FlapStatus {
    /// Strict threshold ladder over the parsed float. Integer boundaries
    /// compare by equality; fractional temperatures between them fall through
    /// to the fully-open arm, matching the control firmware.
    #[must_use]
    pub fn from_avg_temperature(temperature: f64) -> Self {
        if temperature < 33.0 {
            Self::Closed
        } else if temperature == 33.0 {
            Self::Open25
        } else if temperature == 34.0 {
            Self::Open50
        } else if temperature == 35.0 {
            Self::Open75
        } else {
            Self::FullyOpen
        }
    }

    /// Servo angle in degrees (180 is fully closed, 0 fully open).
    #[must_use]
    pub const fn servo_angle(self) -> u16 {
        match self {
            Self::Closed => 180,
            Self::Open25 => 135,
            Self::Open50 => 90,
            Self::Open75 => 45,
            Self::FullyOpen => 0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "Closed (180°)",
            Self::Open25 => "25% Open (135°)",
            Self::Open50 => "50% Open (90°)",
            Self::Open75 => "75% Open (45°)",
            Self::FullyOpen => "100% Open (0°)",
        }
    }
}

impl fmt::Display for FlapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FlapStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Canonical normalized sensor record, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    /// Raw timestamp token exactly as received, preserved for audit.
    pub original_time: String,
    /// `"DD, HH:MM:SS"` axis label derived from the parsed time.
    pub display_time: String,
    /// Epoch milliseconds; the only field safe to compare numerically.
    pub timestamp_millis: i64,
    pub avg_temperature: f64,
    pub humidity: f64,
    #[serde(rename = "tempDHT1")]
    pub temp_dht1: f64,
    #[serde(rename = "tempDHT2")]
    pub temp_dht2: f64,
    #[serde(rename = "tempDHT3")]
    pub temp_dht3: f64,
    pub ds_sensor4: f64,
    pub ds_sensor5: f64,
    pub ds_sensor6: f64,
    pub flap_status: FlapStatus,
    pub relay_fan1_angle: u16,
    pub relay_fan2_angle: u16,
    /// True when the raw timestamp was malformed and the current time was
    /// substituted; such records are counted and logged, not silently trusted.
    pub timestamp_degraded: bool,
}

impl SensorReading {
    /// A reading with actual probe data behind it. The sheet pads empty rows
    /// with zeros; those are dropped before charting.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.avg_temperature > 0.0 && self.humidity > 0.0
    }
}

/// Map a raw relay value to a pseudo-angle for charting.
///
/// Only the exact string `"on"` counts as on; every other value, including an
/// absent field, maps to 0.
#[must_use]
pub fn relay_angle(raw: Option<&str>) -> u16 {
    if raw == Some("on") { 90 } else { 0 }
}

/// Parse a raw timestamp token.
///
/// Two shapes are accepted: a full `"YYYY-MM-DD HH:MM:SS"` (or RFC 3339)
/// datetime, and a bare `"HH:MM:SS"` time-of-day taken to be today in the
/// observer's local timezone.
///
/// # Errors
///
/// Returns `AppError::MalformedTimestamp` for any other shape; callers decide
/// the substitution policy.
pub fn parse_timestamp(token: &str, today: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::MalformedTimestamp("empty timestamp".to_string()));
    }

    if token.contains('-') {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(token, "%Y-%m-%d %H:%M:%S") {
            return resolve_local(parsed)
                .ok_or_else(|| AppError::MalformedTimestamp(format!("unrepresentable local time: {token:?}")));
        }
        // Some endpoint revisions emit RFC 3339 (sheet cells formatted as dates).
        return DateTime::parse_from_rfc3339(token)
            .map(|dt| dt.with_timezone(&Local))
            .map_err(|e| AppError::MalformedTimestamp(format!("{token:?}: {e}")));
    }

    let time = NaiveTime::parse_from_str(token, "%H:%M:%S")
        .map_err(|e| AppError::MalformedTimestamp(format!("{token:?}: {e}")))?;
    resolve_local(today.date_naive().and_time(time))
        .ok_or_else(|| AppError::MalformedTimestamp(format!("unrepresentable local time: {token:?}")))
}

fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    // DST gaps/overlaps: take the earlier of the two candidate instants.
    Local.from_local_datetime(&naive).earliest()
}

/// Normalize one raw record against the current wall clock.
#[must_use]
pub fn normalize(record: &RawRecord) -> SensorReading {
    normalize_at(record, Local::now())
}

/// Normalize one raw record, with `now` injected for bare time-of-day
/// timestamps and for the malformed-timestamp substitution.
///
/// Never fails: numeric fields default to `0.0`, an unparseable timestamp is
/// replaced by `now` and flagged via `timestamp_degraded`.
#[must_use]
pub fn normalize_at(record: &RawRecord, now: DateTime<Local>) -> SensorReading {
    let original_time = record.text(TIME_KEYS).unwrap_or_default().to_string();
    let (time, timestamp_degraded) = match parse_timestamp(&original_time, now) {
        Ok(parsed) => (parsed, false),
        Err(_) => (now, true),
    };

    let avg_temperature = record.number(AVG_TEMP_KEYS);

    SensorReading {
        display_time: time.format("%d, %H:%M:%S").to_string(),
        timestamp_millis: time.timestamp_millis(),
        original_time,
        avg_temperature,
        humidity: record.number(HUMIDITY_KEYS),
        temp_dht1: record.number(TEMP_DHT1_KEYS),
        temp_dht2: record.number(TEMP_DHT2_KEYS),
        temp_dht3: record.number(TEMP_DHT3_KEYS),
        ds_sensor4: record.number(DS_SENSOR4_KEYS),
        ds_sensor5: record.number(DS_SENSOR5_KEYS),
        ds_sensor6: record.number(DS_SENSOR6_KEYS),
        flap_status: FlapStatus::from_avg_temperature(avg_temperature),
        relay_fan1_angle: relay_angle(record.text(RELAY_FAN1_KEYS)),
        relay_fan2_angle: relay_angle(record.text(RELAY_FAN2_KEYS)),
        timestamp_degraded,
    }
}
