//! Unit tests for UI preference persistence.
//!
//! Run with: cargo test --test prefs_unit_test

use std::fs;
use std::path::PathBuf;

use hivemon::dashboard::{Control, Controls};
use hivemon::pipeline::TimeWindow;
use hivemon::prefs::{Preferences, SeriesToggles};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hivemon-test-{}-{name}.json", std::process::id()))
}

#[test]
fn save_and_load_round_trip() {
    let path = temp_path("round-trip");

    let mut controls = Controls::default();
    controls.toggle(Control::Mist);
    let prefs = Preferences {
        dark_mode: true,
        window: TimeWindow::OneWeek,
        selected_series: SeriesToggles {
            humidity: false,
            ..SeriesToggles::default()
        },
        controls,
    };

    prefs.save(&path).expect("save preferences");
    let loaded = Preferences::load(&path);
    fs::remove_file(&path).ok();

    assert_eq!(loaded, prefs);
}

#[test]
fn missing_file_yields_defaults() {
    let loaded = Preferences::load(&temp_path("does-not-exist"));

    assert_eq!(loaded, Preferences::default());
    assert!(!loaded.dark_mode);
    assert_eq!(loaded.window, TimeWindow::SixHours);
    assert!(loaded.selected_series.avg_temperature);
}

#[test]
fn corrupt_file_yields_defaults() {
    let path = temp_path("corrupt");
    fs::write(&path, "not json {").expect("write corrupt file");

    let loaded = Preferences::load(&path);
    fs::remove_file(&path).ok();

    assert_eq!(loaded, Preferences::default());
}

#[test]
fn unknown_and_missing_fields_are_tolerated() {
    let path = temp_path("partial");
    fs::write(&path, r#"{"darkMode": true, "someFutureKnob": 42}"#).expect("write partial file");

    let loaded = Preferences::load(&path);
    fs::remove_file(&path).ok();

    assert!(loaded.dark_mode);
    // Everything absent falls back to its default
    assert_eq!(loaded.window, TimeWindow::SixHours);
    assert_eq!(loaded.controls, Controls::default());
}
