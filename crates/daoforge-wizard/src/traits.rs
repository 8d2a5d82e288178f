use crate::event::ModalId;
use std::collections::HashMap;

/// Opens and closes interrupt modals. The orchestrator only ever opens;
/// dismissal is wired by the host UI.
pub trait ModalController {
    fn open(&mut self, modal: ModalId);
    fn close(&mut self, modal: ModalId);
}

/// Product telemetry boundary. Implementations must not block; delivery is
/// best effort and no result is consumed.
pub trait TelemetrySink {
    fn track_event(&self, name: &str, props: HashMap<String, String>);
}
