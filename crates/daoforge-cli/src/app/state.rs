// src/app/state.rs
use daoforge_analytics::tracker::AnalyticsTracker;
use daoforge_types::telemetry::TelemetryEvent;
use daoforge_wizard::event::ModalId;
use daoforge_wizard::traits::{ModalController, TelemetrySink};
use std::collections::HashMap;

/// Holds whichever interrupt modal is currently shown. The orchestrator
/// opens modals through the `ModalController` boundary; dismissal comes
/// from the UI.
#[derive(Debug, Default)]
pub struct ModalHost {
    active: Option<ModalId>,
}

impl ModalHost {
    pub fn active(&self) -> Option<ModalId> {
        self.active
    }
}

impl ModalController for ModalHost {
    fn open(&mut self, modal: ModalId) {
        self.active = Some(modal);
    }

    fn close(&mut self, modal: ModalId) {
        if self.active == Some(modal) {
            self.active = None;
        }
    }
}

/// Adapts the analytics tracker to the wizard's telemetry boundary.
pub struct TelemetryBridge {
    tracker: AnalyticsTracker,
}

impl TelemetryBridge {
    pub fn new(tracker: AnalyticsTracker) -> Self {
        Self { tracker }
    }
}

impl TelemetrySink for TelemetryBridge {
    fn track_event(&self, name: &str, props: HashMap<String, String>) {
        self.tracker.track(TelemetryEvent::new(name, props));
    }
}
