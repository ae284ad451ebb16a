//! Watch a connection monitor run: live cycles, assessments, countdown.
//!
//! Probes immediately on startup, then on a fast demo cadence. History
//! is persisted under the system temp directory, so repeated runs pick
//! up where the previous one stopped.

use netpulse::{JsonFileStorage, Monitor, MonitorConfig, MonitorEvent};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("📡 NetPulse Connection Monitor");
    println!("==============================");

    let storage_dir = std::env::temp_dir();
    println!(
        "💾 History file: {}",
        storage_dir.join(netpulse::HISTORY_FILE_NAME).display()
    );

    let mut monitor = Monitor::builder()
        .config(MonitorConfig::rapid())
        .storage(JsonFileStorage::new(&storage_dir))
        .start()
        .await?;

    let mut events = monitor.events();
    println!(
        "⏱️ Probing immediately, then every {:?}\n",
        monitor.config().probe_interval
    );

    let mut completed = 0;
    while let Some(event) = events.next().await {
        match event {
            MonitorEvent::CycleStarted { trigger, .. } => {
                println!("🚀 Probe cycle started ({})", trigger.as_str());
            }
            MonitorEvent::CycleCompleted { result, .. } => {
                let when = chrono::DateTime::from_timestamp_millis(result.timestamp)
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| result.timestamp.to_string());
                println!(
                    "✅ [{}] {:.2} Mbps down / {:.2} Mbps up, {:.1} ms latency ({:.1} ms jitter)",
                    when, result.download, result.upload, result.latency, result.jitter
                );
                completed += 1;
            }
            MonitorEvent::InsightUpdated { insight } => {
                println!("🔎 Assessment: {} - {}", insight.status.as_str(), insight.summary);
                for recommendation in &insight.recommendations {
                    println!("   💡 {}", recommendation);
                }
                if completed >= 2 {
                    break;
                }
            }
        }
    }

    let snapshot = monitor.snapshot();
    println!(
        "\n📊 {} samples retained, next cycle in {:?}",
        snapshot.history.len(),
        snapshot.next_run_in
    );

    monitor.shutdown().await;
    Ok(())
}
