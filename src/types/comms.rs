//! Inter-agent communication types
//!
//! Synthetic message traffic for visualization. Decorative only: messages
//! have no causal effect on actions or metrics and must never be read as a
//! coordination log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    PriceUpdate,
    VolumeIntent,
    ExecutionReport,
    LiquidityInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCommunication {
    /// Borrowed from a uniformly chosen action, not from the agents' own
    /// activity.
    pub timestamp: i64,
    pub from_agent: String,
    pub to_agent: String,
    pub kind: MessageKind,
    pub content: String,
    /// Illustrative latency in milliseconds.
    pub latency_ms: f64,
}
