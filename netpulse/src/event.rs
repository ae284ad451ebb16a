//! Monitor events for async consumption

use netpulse_core::SpeedResult;
use netpulse_insight::ConnectionInsight;
use tokio::sync::mpsc;
use uuid::Uuid;

/// What caused a probe cycle to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// The immediate cycle fired when the monitor started
    Startup,
    /// The countdown reached its deadline
    Scheduled,
    /// A caller asked for a cycle directly
    Manual,
}

impl TriggerSource {
    /// Trigger as a short display string
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerSource::Startup => "startup",
            TriggerSource::Scheduled => "scheduled",
            TriggerSource::Manual => "manual",
        }
    }
}

/// Events emitted while the monitor runs
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    /// A probe cycle began
    CycleStarted {
        /// Identifier shared by this cycle's events
        cycle_id: Uuid,
        /// What caused the cycle
        trigger: TriggerSource,
    },
    /// A probe cycle finished and its sample entered the history
    CycleCompleted {
        /// Identifier shared by this cycle's events
        cycle_id: Uuid,
        /// The completed sample
        result: SpeedResult,
    },
    /// The connection assessment was refreshed
    InsightUpdated {
        /// The new assessment
        insight: ConnectionInsight,
    },
}

impl MonitorEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            MonitorEvent::CycleStarted { .. } => "cycle_started",
            MonitorEvent::CycleCompleted { .. } => "cycle_completed",
            MonitorEvent::InsightUpdated { .. } => "insight_updated",
        }
    }
}

/// Stream of monitor events for async iteration
#[derive(Debug)]
pub struct EventStream {
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<MonitorEvent>,
}

impl EventStream {
    /// Create a new event stream with a receiver
    pub fn new(receiver: mpsc::UnboundedReceiver<MonitorEvent>) -> Self {
        Self { receiver }
    }

    /// Get the next event from the stream
    pub async fn next(&mut self) -> Option<MonitorEvent> {
        self.receiver.recv().await
    }

    /// Try to get the next event without blocking
    pub fn try_next(&mut self) -> Result<Option<MonitorEvent>, mpsc::error::TryRecvError> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => {
                Err(mpsc::error::TryRecvError::Disconnected)
            }
        }
    }

    /// Close the event stream
    pub fn close(&mut self) {
        self.receiver.close();
    }

    /// Check if the event stream is closed
    pub fn is_closed(&self) -> bool {
        self.receiver.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_result() -> SpeedResult {
        SpeedResult {
            timestamp: 1_700_000_000_000,
            download: 50.0,
            upload: 10.0,
            latency: 25.0,
            jitter: 3.0,
        }
    }

    #[test]
    fn test_event_types() {
        let cycle_id = Uuid::new_v4();
        let started = MonitorEvent::CycleStarted {
            cycle_id,
            trigger: TriggerSource::Startup,
        };
        assert_eq!(started.event_type(), "cycle_started");

        let completed = MonitorEvent::CycleCompleted {
            cycle_id,
            result: create_test_result(),
        };
        assert_eq!(completed.event_type(), "cycle_completed");

        let updated = MonitorEvent::InsightUpdated {
            insight: ConnectionInsight::no_data(),
        };
        assert_eq!(updated.event_type(), "insight_updated");
    }

    #[test]
    fn test_trigger_display_strings() {
        assert_eq!(TriggerSource::Startup.as_str(), "startup");
        assert_eq!(TriggerSource::Scheduled.as_str(), "scheduled");
        assert_eq!(TriggerSource::Manual.as_str(), "manual");
    }

    #[tokio::test]
    async fn test_event_stream_basic() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut stream = EventStream::new(rx);

        tx.send(MonitorEvent::CycleStarted {
            cycle_id: Uuid::new_v4(),
            trigger: TriggerSource::Manual,
        })
        .unwrap();

        let event = stream.next().await.unwrap();
        assert_eq!(event.event_type(), "cycle_started");

        assert!(stream.try_next().unwrap().is_none());

        stream.close();
        assert!(tx.is_closed());
    }
}
