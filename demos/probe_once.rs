//! Run a single probe cycle against the default endpoints and print
//! the resulting sample.

use netpulse::{Probe, ProbeConfig, ProbeEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("🚀 Single probe cycle");
    println!("=====================");

    let config = ProbeConfig::default();
    println!("   latency  {}", config.latency_url);
    println!("   download {}", config.download_url);
    println!("   upload   {}", config.upload_url);
    println!();

    let engine = ProbeEngine::new(config)?;
    let result = engine.measure().await;

    println!("\n📊 Results");
    println!("   Download  {:>8.2} Mbps", result.download);
    println!("   Upload    {:>8.2} Mbps", result.upload);
    println!("   Latency   {:>8.1} ms", result.latency);
    println!("   Jitter    {:>8.1} ms", result.jitter);
    println!("   Timestamp {} ms since epoch", result.timestamp);

    Ok(())
}
