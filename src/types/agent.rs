//! Agent action types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Buy,
    Sell,
    Hold,
}

/// One agent's trade or hold decision.
///
/// Agents are bound 1:1 to exchanges (`Agent_<exchange>`). Profit is realized
/// on the sell leg only; buy legs carry their impact but zero profit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentAction {
    pub timestamp: i64,
    pub agent: String,
    pub exchange: String,
    pub kind: ActionKind,
    pub volume: Decimal,
    pub price: Decimal,
    /// Gross profit, nonzero only on the realizing (sell) leg.
    pub profit: Decimal,
    /// Per-unit impact cost at the executed volume.
    pub impact: Decimal,
    /// profit - impact * volume.
    pub net_profit: Decimal,
}

impl AgentAction {
    /// Conventional agent identifier for an exchange.
    pub fn agent_for(exchange: &str) -> String {
        format!("Agent_{exchange}")
    }
}
