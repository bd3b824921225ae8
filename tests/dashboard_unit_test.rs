//! Unit tests for the dashboard state machine and fetch-cycle serialization.
//!
//! Run with: cargo test --test dashboard_unit_test

use hivemon::common::AppState;
use hivemon::config::Config;
use hivemon::dashboard::{Control, Controls, Dashboard};
use hivemon::hive::{HiveClient, HiveId, RawRecord};
use hivemon::pipeline::{MAX_POINTS, SensorReading, TimeWindow, normalize};

fn reading(timestamp_millis: i64) -> SensorReading {
    let record: RawRecord =
        serde_json::from_str(r#"{"avgTempDS": "34", "humidityDHT1": "60"}"#).expect("record json");
    let mut r = normalize(&record);
    r.timestamp_millis = timestamp_millis;
    r
}

fn test_config() -> Config {
    Config {
        hive1_endpoint_url: "http://localhost:9/hive1".to_string(),
        hive2_endpoint_url: "http://localhost:9/hive2".to_string(),
        poll_interval_seconds: 5,
        request_timeout_seconds: 1,
        prefs_path: "hivemon-prefs.json".into(),
    }
}

#[test]
fn apply_refresh_updates_series_and_latest() {
    let mut dashboard = Dashboard::default();
    let ticket = dashboard.begin_refresh();

    assert!(dashboard.apply_refresh(ticket, vec![reading(1_000), reading(2_000)]));
    assert_eq!(dashboard.series().len(), 2);
    assert_eq!(dashboard.latest().map(|r| r.timestamp_millis), Some(2_000));
}

#[test]
fn stale_ticket_is_discarded() {
    let mut dashboard = Dashboard::default();

    let slow = dashboard.begin_refresh();
    let fast = dashboard.begin_refresh();

    assert!(dashboard.apply_refresh(fast, vec![reading(2_000)]));
    // The earlier cycle completes afterwards; its result must not win
    assert!(!dashboard.apply_refresh(slow, vec![reading(1_000)]));

    assert_eq!(dashboard.latest().map(|r| r.timestamp_millis), Some(2_000));
    assert_eq!(dashboard.series().len(), 1);
}

#[test]
fn selection_change_invalidates_inflight_ticket() {
    let mut dashboard = Dashboard::default();

    let inflight = dashboard.begin_refresh();
    dashboard.select_hive(HiveId::Hive2);
    assert!(!dashboard.apply_refresh(inflight, vec![reading(1_000)]));

    let inflight = dashboard.begin_refresh();
    dashboard.select_window(TimeWindow::OneWeek);
    assert!(!dashboard.apply_refresh(inflight, vec![reading(1_000)]));

    // Re-selecting the current values is a no-op and keeps the ticket valid
    let inflight = dashboard.begin_refresh();
    dashboard.select_hive(HiveId::Hive2);
    dashboard.select_window(TimeWindow::OneWeek);
    assert!(dashboard.apply_refresh(inflight, vec![reading(1_000)]));
}

#[test]
fn empty_result_keeps_previous_latest() {
    let mut dashboard = Dashboard::default();

    let ticket = dashboard.begin_refresh();
    assert!(dashboard.apply_refresh(ticket, vec![reading(1_000)]));

    let ticket = dashboard.begin_refresh();
    assert!(dashboard.apply_refresh(ticket, Vec::new()));

    // Series is replaced wholesale, but the status snapshot stays stale-but-present
    assert!(dashboard.series().is_empty());
    assert_eq!(dashboard.latest().map(|r| r.timestamp_millis), Some(1_000));
}

#[test]
fn apply_refresh_windows_and_caps_the_series() {
    let mut dashboard = Dashboard::default();
    dashboard.select_window(TimeWindow::All);

    let ticket = dashboard.begin_refresh();
    let readings: Vec<SensorReading> = (0..250).map(|i| reading(i * 1_000)).collect();
    assert!(dashboard.apply_refresh(ticket, readings));

    assert_eq!(dashboard.series().len(), MAX_POINTS);
    assert_eq!(
        dashboard.latest().map(|r| r.timestamp_millis),
        Some(249 * 1_000)
    );
}

#[test]
fn toggle_control_flips_display_state_only() {
    let mut dashboard = Dashboard::default();
    assert!(dashboard.controls().fan_relay1);
    assert!(!dashboard.controls().mist);

    dashboard.toggle_control(Control::FanRelay1);
    dashboard.toggle_control(Control::Mist);

    assert!(!dashboard.controls().fan_relay1);
    assert!(dashboard.controls().mist);
    assert!(dashboard.controls().is_on(Control::Mist));
}

#[test]
fn controls_default_matches_rig_startup() {
    let controls = Controls::default();
    assert!(controls.fan_relay1);
    assert!(!controls.fan_relay2);
    assert!(!controls.mist);
    assert!(controls.entry_flap);
}

#[test]
fn app_state_shares_one_dashboard() {
    tokio_test::block_on(async {
        let config = test_config();
        let client = HiveClient::new(&config);
        let state = AppState::new(config, client, Dashboard::default());
        let clone = state.clone();

        let ticket = state.dashboard.write().await.begin_refresh();
        assert!(
            clone
                .dashboard
                .write()
                .await
                .apply_refresh(ticket, vec![reading(1_000)])
        );

        assert_eq!(state.dashboard.read().await.series().len(), 1);
    });
}

#[test]
fn config_endpoint_mapping() {
    let config = test_config();
    assert_eq!(config.endpoint(HiveId::Hive1), "http://localhost:9/hive1");
    assert_eq!(config.endpoint(HiveId::Hive2), "http://localhost:9/hive2");
}
