//! Connection monitor: cycle scheduling, history ownership, and the
//! read-only state feed

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::event::{EventStream, MonitorEvent, TriggerSource};
use crate::history::HistoryLog;
use crate::storage::HistoryStorage;
use netpulse_core::{Probe, ProbeConfig, ProbeEngine, SpeedResult};
use netpulse_insight::{ConnectionInsight, InsightProvider, InsightRequest};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Fluent builder assembling and starting a [`Monitor`]
#[derive(Debug, Default)]
pub struct MonitorBuilder {
    config: MonitorConfig,
    probe: Option<Box<dyn Probe>>,
    insight: Option<Box<dyn InsightProvider>>,
    storage: Option<Box<dyn HistoryStorage>>,
}

impl MonitorBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scheduling configuration
    pub fn config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom probe instead of the HTTP measurement engine
    pub fn probe(mut self, probe: impl Probe + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Wire the analysis service consulted after each cycle.
    ///
    /// Without one, every assessment reads as unreachable.
    pub fn insight(mut self, provider: impl InsightProvider + 'static) -> Self {
        self.insight = Some(Box::new(provider));
        self
    }

    /// Wire durable history storage.
    ///
    /// Without one, history lives in memory only.
    pub fn storage(mut self, storage: impl HistoryStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Load persisted history, fire the startup cycle, and begin the
    /// countdown toward the first scheduled cycle
    pub async fn start(self) -> Result<Monitor, MonitorError> {
        let config = self.config;
        let probe: Box<dyn Probe> = match self.probe {
            Some(probe) => probe,
            None => {
                let engine = ProbeEngine::new(ProbeConfig::default()).map_err(|err| {
                    MonitorError::Initialization {
                        reason: format!("Failed to build probe engine: {}", err),
                    }
                })?;
                Box::new(engine)
            }
        };

        let mut history = HistoryLog::new(config.history_limit);
        if let Some(storage) = &self.storage {
            match storage.load().await {
                Ok(entries) => {
                    debug!("Loaded {} persisted samples", entries.len());
                    history = HistoryLog::from_entries(entries, config.history_limit);
                }
                Err(err) => {
                    warn!("Could not load history, starting empty: {}", err);
                }
            }
        }

        let deadline = Instant::now() + config.probe_interval;
        let core = Arc::new(MonitorCore {
            state: RwLock::new(MonitorState {
                history,
                insight: ConnectionInsight::no_data(),
                next_run_in: config.probe_interval,
                deadline,
            }),
            in_flight: AtomicBool::new(false),
            subscribers: RwLock::new(Vec::new()),
            probe,
            insight: self.insight,
            storage: self.storage,
            config,
        });

        let startup_core = core.clone();
        let startup_handle = tokio::spawn(async move {
            startup_core.run_cycle(TriggerSource::Startup).await;
        });

        let tick_core = core.clone();
        let tick_handle = tokio::spawn(async move {
            let mut ticker = interval(tick_core.config.tick_interval);
            loop {
                ticker.tick().await;
                if tick_core.countdown_tick() {
                    tick_core.run_cycle(TriggerSource::Scheduled).await;
                }
            }
        });

        info!(
            "Monitor started, probing every {:?}",
            core.config.probe_interval
        );
        Ok(Monitor {
            core,
            startup_handle: Some(startup_handle),
            tick_handle: Some(tick_handle),
        })
    }
}

/// Continuous connection monitor.
///
/// Owns the bounded history, runs the probe on a fixed interval plus
/// manual triggers, keeps the latest assessment, and feeds read-only
/// snapshots and events to callers. The background tasks stop when the
/// monitor is shut down or dropped.
#[derive(Debug)]
pub struct Monitor {
    core: Arc<MonitorCore>,
    startup_handle: Option<tokio::task::JoinHandle<()>>,
    tick_handle: Option<tokio::task::JoinHandle<()>>,
}

impl Monitor {
    /// Create a builder for a monitor
    pub fn builder() -> MonitorBuilder {
        MonitorBuilder::new()
    }

    /// Run a probe cycle immediately.
    ///
    /// No-op while another cycle is running. Returns whether this call
    /// started one.
    pub async fn run_now(&self) -> bool {
        self.core.run_cycle(TriggerSource::Manual).await
    }

    /// Re-run the assessment over the current history window and store
    /// the outcome
    pub async fn refresh_insight(&self) -> ConnectionInsight {
        let insight = self.core.refresh_insight().await;
        {
            let mut state = self.core.state.write();
            state.insight = insight.clone();
        }
        self.core.emit(MonitorEvent::InsightUpdated {
            insight: insight.clone(),
        });
        insight
    }

    /// Read-only view of the current monitor state
    pub fn snapshot(&self) -> MonitorSnapshot {
        let state = self.core.state.read();
        MonitorSnapshot {
            history: state.history.entries(),
            in_progress: self.core.in_flight.load(Ordering::SeqCst),
            insight: state.insight.clone(),
            next_run_in: state.next_run_in,
        }
    }

    /// All retained samples, oldest first
    pub fn history(&self) -> Vec<SpeedResult> {
        self.core.state.read().history.entries()
    }

    /// Latest connection assessment
    pub fn latest_insight(&self) -> ConnectionInsight {
        self.core.state.read().insight.clone()
    }

    /// Time until the next scheduled cycle, as of the latest countdown
    /// tick
    pub fn time_remaining(&self) -> Duration {
        self.core.state.read().next_run_in
    }

    /// Whether a probe cycle is running right now
    pub fn is_running(&self) -> bool {
        self.core.in_flight.load(Ordering::SeqCst)
    }

    /// Subscribe to monitor events
    pub fn events(&self) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        self.core.subscribers.write().push(tx);
        EventStream::new(rx)
    }

    /// Scheduling configuration in effect
    pub fn config(&self) -> &MonitorConfig {
        &self.core.config
    }

    /// Stop the background scheduling tasks
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.abort();
        }
        if let Some(handle) = self.startup_handle.take() {
            handle.abort();
        }
        info!("Monitor stopped");
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.abort();
        }
        if let Some(handle) = self.startup_handle.take() {
            handle.abort();
        }
    }
}

/// Read-only view handed to display layers
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    /// Retained samples, oldest first
    pub history: Vec<SpeedResult>,
    /// Whether a probe cycle is running right now
    pub in_progress: bool,
    /// Latest connection assessment
    pub insight: ConnectionInsight,
    /// Time until the next scheduled cycle, as of the latest countdown
    /// tick
    pub next_run_in: Duration,
}

#[derive(Debug)]
struct MonitorCore {
    config: MonitorConfig,
    probe: Box<dyn Probe>,
    insight: Option<Box<dyn InsightProvider>>,
    storage: Option<Box<dyn HistoryStorage>>,
    state: RwLock<MonitorState>,
    in_flight: AtomicBool,
    subscribers: RwLock<Vec<mpsc::UnboundedSender<MonitorEvent>>>,
}

#[derive(Debug)]
struct MonitorState {
    history: HistoryLog,
    insight: ConnectionInsight,
    next_run_in: Duration,
    deadline: Instant,
}

impl MonitorCore {
    // One countdown step: refresh the displayed remaining time and
    // report whether the deadline has passed.
    fn countdown_tick(&self) -> bool {
        let mut state = self.state.write();
        let now = Instant::now();
        if now >= state.deadline {
            state.next_run_in = Duration::ZERO;
            true
        } else {
            state.next_run_in = state.deadline - now;
            false
        }
    }

    async fn run_cycle(&self, trigger: TriggerSource) -> bool {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!(
                "Probe cycle already running, ignoring {} trigger",
                trigger.as_str()
            );
            return false;
        }
        if trigger == TriggerSource::Scheduled && Instant::now() < self.state.read().deadline {
            // Another cycle finished between the countdown tick and
            // this point and re-armed the deadline; the trigger is
            // stale.
            self.in_flight.store(false, Ordering::SeqCst);
            return false;
        }

        let cycle_id = Uuid::new_v4();
        info!("Probe cycle {} started ({})", cycle_id, trigger.as_str());
        self.emit(MonitorEvent::CycleStarted { cycle_id, trigger });

        let result = self.probe.measure().await;

        let entries = {
            let mut state = self.state.write();
            state.history.push(result.clone());
            state.history.entries()
        };

        if let Some(storage) = &self.storage {
            if let Err(err) = storage.save(&entries).await {
                warn!("Could not persist history: {}", err);
            }
        }

        self.emit(MonitorEvent::CycleCompleted { cycle_id, result });

        let insight = self.refresh_insight().await;
        {
            let mut state = self.state.write();
            state.insight = insight.clone();
            state.deadline = Instant::now() + self.config.probe_interval;
            state.next_run_in = self.config.probe_interval;
        }
        self.emit(MonitorEvent::InsightUpdated { insight });

        self.in_flight.store(false, Ordering::SeqCst);
        debug!("Probe cycle {} finished", cycle_id);
        true
    }

    async fn refresh_insight(&self) -> ConnectionInsight {
        let (window, latest) = {
            let state = self.state.read();
            (
                state.history.recent(self.config.insight_window),
                state.history.latest().cloned(),
            )
        };

        // Nothing measured yet: answer locally, without a service call
        let latest = match latest {
            Some(latest) => latest,
            None => return ConnectionInsight::no_data(),
        };
        let provider = match &self.insight {
            Some(provider) => provider,
            None => return ConnectionInsight::unreachable(),
        };

        let request = InsightRequest {
            history: window,
            latest,
        };
        match provider.analyze(&request).await {
            Ok(insight) => insight,
            Err(err) => {
                warn!("Assessment request failed: {}", err);
                ConnectionInsight::unreachable()
            }
        }
    }

    fn emit(&self, event: MonitorEvent) {
        let mut subscribers = self.subscribers.write();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
