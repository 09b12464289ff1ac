//! Display and printing utilities

use std::time::Duration;
use tracing::info;

use crate::types::SimulationState;

pub fn print_run_summary(state: &SimulationState, elapsed: Duration) {
    info!("\n📊 Simulation Run {} ({:?})", state.run_id, elapsed);
    info!("   📈 PIPELINE:");
    info!("     Ticks processed: {}", state.raw_data.len());
    info!("     Agent actions: {}", state.actions.len());
    info!("     Messages synthesized: {}", state.communications.len());
    info!(
        "     Oracle: {}",
        if state.oracle.ready {
            format!("ready, {} observations scored", state.oracle.observations_scored)
        } else {
            "not used".to_string()
        }
    );

    if let Some(metrics) = &state.metrics {
        info!("   💰 PERFORMANCE:");
        info!("     Realized opportunities: {}", metrics.num_opportunities);
        info!("     Gross profit: ${:.2}", metrics.total_profit);
        info!("     Impact cost: ${:.2}", metrics.total_impact_cost);
        info!("     Net profit: ${:.2}", metrics.net_profit);
        info!("     Success rate: {:.1}%", metrics.success_rate * 100.0);
        info!("     Sharpe ratio: {:.3}", metrics.sharpe_ratio);
        info!("     Max drawdown: ${:.2}", metrics.max_drawdown);
        info!("     Return on capital: {:.3}%", metrics.return_on_capital * rust_decimal_macros::dec!(100));
        info!("     Avg execution gap: {:.0}ms", metrics.avg_execution_time_ms);
    }

    info!("");
}
