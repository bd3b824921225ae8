use serde::{Deserialize, Serialize};

use crate::hive::HiveId;
use crate::pipeline::{SensorReading, TimeWindow, apply_window};

/// Manual control toggled from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    FanRelay1,
    FanRelay2,
    Mist,
    EntryFlap,
}

/// Display-only toggle states for the manual controls card. Flipping one
/// never calls an actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Controls {
    pub fan_relay1: bool,
    pub fan_relay2: bool,
    pub mist: bool,
    pub entry_flap: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            fan_relay1: true,
            fan_relay2: false,
            mist: false,
            entry_flap: true,
        }
    }
}

impl Controls {
    pub fn toggle(&mut self, control: Control) {
        match control {
            Control::FanRelay1 => self.fan_relay1 = !self.fan_relay1,
            Control::FanRelay2 => self.fan_relay2 = !self.fan_relay2,
            Control::Mist => self.mist = !self.mist,
            Control::EntryFlap => self.entry_flap = !self.entry_flap,
        }
    }

    #[must_use]
    pub const fn is_on(&self, control: Control) -> bool {
        match control {
            Control::FanRelay1 => self.fan_relay1,
            Control::FanRelay2 => self.fan_relay2,
            Control::Mist => self.mist,
            Control::EntryFlap => self.entry_flap,
        }
    }
}

/// Handle for one fetch cycle: the selection it was started against and the
/// generation it must still hold to apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
    pub hive: HiveId,
    pub window: TimeWindow,
}

/// Application state consumed by the rendering layer.
///
/// The interval timer and user-triggered refreshes race; every cycle starts by
/// taking a [`RefreshTicket`] and only the most recently issued ticket may
/// apply its result, so a slow response can never overwrite a newer one.
/// Selection changes also invalidate in-flight tickets.
#[derive(Debug)]
pub struct Dashboard {
    selected_hive: HiveId,
    window: TimeWindow,
    series: Vec<SensorReading>,
    latest: Option<SensorReading>,
    controls: Controls,
    issued_generation: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(HiveId::Hive1, TimeWindow::default(), Controls::default())
    }
}

impl Dashboard {
    #[must_use]
    pub fn new(hive: HiveId, window: TimeWindow, controls: Controls) -> Self {
        Self {
            selected_hive: hive,
            window,
            series: Vec::new(),
            latest: None,
            controls,
            issued_generation: 0,
        }
    }

    #[must_use]
    pub fn selected_hive(&self) -> HiveId {
        self.selected_hive
    }

    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// The bounded series currently displayed, oldest first.
    #[must_use]
    pub fn series(&self) -> &[SensorReading] {
        &self.series
    }

    /// Snapshot of the newest reading. Retained across failed or empty fetch
    /// cycles so the status card shows stale data rather than blanks.
    #[must_use]
    pub fn latest(&self) -> Option<&SensorReading> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Switch the displayed hive. The prior series stays visible until the
    /// next fetch cycle replaces it; any in-flight cycle is invalidated.
    pub fn select_hive(&mut self, hive: HiveId) {
        if self.selected_hive != hive {
            self.selected_hive = hive;
            self.issued_generation += 1;
        }
    }

    /// Switch the recency window. Same staleness rules as [`select_hive`].
    ///
    /// [`select_hive`]: Self::select_hive
    pub fn select_window(&mut self, window: TimeWindow) {
        if self.window != window {
            self.window = window;
            self.issued_generation += 1;
        }
    }

    pub fn toggle_control(&mut self, control: Control) {
        self.controls.toggle(control);
    }

    /// Start a fetch cycle: bump the issued generation and snapshot the
    /// current selection for the worker.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued_generation += 1;
        RefreshTicket {
            generation: self.issued_generation,
            hive: self.selected_hive,
            window: self.window,
        }
    }

    /// Apply a completed fetch cycle's normalized readings.
    ///
    /// Windows the series against the ticket's selection and replaces the
    /// displayed data wholesale. Returns `false` without touching anything
    /// when the ticket is stale (a newer cycle started or the selection
    /// changed since it was issued).
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, readings: Vec<SensorReading>) -> bool {
        if ticket.generation != self.issued_generation {
            return false;
        }

        let bounded = apply_window(&readings, ticket.window);
        if let Some(last) = bounded.last() {
            self.latest = Some(last.clone());
        }
        self.series = bounded;
        true
    }
}
