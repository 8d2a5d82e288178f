use daoforge_types::telemetry::TelemetryEvent;
use tokio::sync::mpsc::{channel, Sender};

const QUEUE_CAPACITY: usize = 256;

/// Queues telemetry events for a background delivery worker. `track` never
/// blocks; when the queue is full the event is dropped.
#[derive(Debug, Clone)]
pub struct AnalyticsTracker {
    sender: Sender<TelemetryEvent>,
}

impl AnalyticsTracker {
    /// Creates the tracker and spawns its delivery worker. Without an
    /// endpoint, events are written to the debug log and discarded.
    pub fn new(endpoint: Option<String>) -> Self {
        let (sender, mut receiver) = channel::<TelemetryEvent>(QUEUE_CAPACITY);
        let http = reqwest::Client::new();

        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                match &endpoint {
                    Some(url) => {
                        if let Err(e) = http.post(url.as_str()).json(&event).send().await {
                            log::debug!("telemetry delivery failed for {}: {}", event.name, e);
                        }
                    }
                    None => {
                        log::debug!("telemetry event {}: {:?}", event.name, event.props);
                    }
                }
            }
        });

        Self { sender }
    }

    /// Queues an event. Best effort only.
    pub fn track(&self, event: TelemetryEvent) {
        if self.sender.try_send(event).is_err() {
            log::debug!("telemetry queue full, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_track_never_blocks_without_a_collector() {
        let tracker = AnalyticsTracker::new(None);
        for i in 0..10 {
            let mut props = HashMap::new();
            props.insert("attempt".to_string(), i.to_string());
            tracker.track(TelemetryEvent::new("daoCreation_publishYourDAO_clicked", props));
        }
    }
}
