//! Aggregate performance metrics types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary metrics over a completed action set.
///
/// Recomputed wholesale from the action set on every aggregation; never
/// updated incrementally. All division-by-zero cases are defined as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Gross profit summed over realizing (sell) actions.
    pub total_profit: Decimal,
    /// Volume summed over realizing actions.
    pub total_volume: Decimal,
    /// impact * volume summed over the full action set, buy legs included.
    pub total_impact_cost: Decimal,
    pub net_profit: Decimal,
    /// Fraction of realizing actions with positive net profit.
    pub success_rate: f64,
    /// Mean inter-timestamp gap across the action set, milliseconds.
    pub avg_execution_time_ms: f64,
    /// Mean net profit over its population standard deviation, realizing
    /// actions only.
    pub sharpe_ratio: f64,
    /// Largest peak-to-trough decline of cumulative net profit.
    pub max_drawdown: Decimal,
    /// net_profit over the assumed capital base.
    pub return_on_capital: Decimal,
    /// Count of realizing actions.
    pub num_opportunities: usize,
}
