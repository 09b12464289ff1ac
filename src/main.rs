//! Cross-Exchange Arbitrage Simulator - Main Entry Point

use anyhow::Result;
use cross_arb_sim::*;
use std::time::Instant;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("💱 Cross-Exchange Arbitrage Simulator v0.3.0");
    info!("📋 Configuration:");
    info!("   Exchanges: {}", config.num_exchanges);
    info!("   Time points: {}", config.num_time_points);
    info!("   Tick interval: {}ms", config.tick_interval_ms);
    info!("   Base price: ${}", config.base_price);
    info!("   Hold probability: {}", config.hold_probability);
    info!("   Message count: {}", config.message_count);
    if let Some(path) = &config.tick_data_file {
        info!("   Tick data file: {}", path);
    }

    // Load or generate ticks
    let ticks = match &config.tick_data_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let import = storage::import_ticks(&raw)?;
            if import.skipped_rows > 0 {
                warn!(
                    "⚠️  Skipped {} malformed rows in {}",
                    import.skipped_rows, path
                );
            }
            info!("✅ Imported {} ticks from {}", import.ticks.len(), path);
            import.ticks
        }
        None => {
            let start = chrono::Utc::now().timestamp_millis();
            let ticks = generator::generate_sample_ticks(&config, start);
            info!(
                "✅ Generated {} sample ticks across {} exchanges",
                ticks.len(),
                config.num_exchanges
            );
            ticks
        }
    };

    // Run the deterministic pipeline; per-run context seeds the impact
    // factors once for the exchanges present
    let started = Instant::now();
    let ctx = pipeline::SimulationContext::for_run(&config, &ticks);
    let state = pipeline::run_pipeline(ticks, &ctx);

    utils::print_run_summary(&state, started.elapsed());

    // Persist artifacts
    if let Err(e) = storage::save_actions(&state.run_id, &state.actions) {
        error!("Failed to save action artifact: {}", e);
    }
    match storage::save_snapshot(&state) {
        Ok(path) => info!("💾 Snapshot written to {}", path.display()),
        Err(e) => error!("Failed to save snapshot: {}", e),
    }

    Ok(())
}
