//! Arbitrage opportunity types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A detected cross-exchange mispricing at one timestamp.
///
/// `spread > 0` by construction: the detector only emits a direction whose
/// spread is strictly positive. Consumed once by the execution simulator,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub timestamp: i64,
    /// Exchange to buy on (at its ask).
    pub buy_exchange: String,
    /// Exchange to sell on (at its bid).
    pub sell_exchange: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    /// sell_price - buy_price, strictly positive.
    pub spread: Decimal,
    /// spread * volume_constraint, the upper bound on gross profit.
    pub profit_potential: Decimal,
    /// Liquidity-derived cap on trade volume for either leg.
    pub volume_constraint: Decimal,
    /// How fast the market is expected to close the gap. Randomized per
    /// instance; illustrative.
    pub decay_rate: Decimal,
}
