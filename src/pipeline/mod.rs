pub mod normalize;
pub mod window;

pub use normalize::{FlapStatus, SensorReading, normalize, normalize_at, parse_timestamp, relay_angle};
pub use window::{MAX_POINTS, TimeWindow, apply_window};
