pub mod client;
pub mod models;

pub use client::HiveClient;
pub use models::{HiveId, RawRecord};
