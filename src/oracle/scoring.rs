//! External action-scoring oracle interface
//!
//! The oracle is a host-loaded, environment-dependent capability. The core
//! consumes it through this trait only, never through a concrete
//! implementation, so the deterministic simulator can stand in for it under
//! test. Model loading is the implementor's concern; it must happen once and
//! be reflected in `status`, not redone per call.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{ActionKind, Tick};

/// One per-exchange market observation, the unit of oracle input.
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    pub timestamp: i64,
    pub price: Decimal,
    pub volume: Decimal,
    pub liquidity: Decimal,
    pub spread: Decimal,
    pub exchange_id: String,
}

impl Observation {
    pub fn from_tick(tick: &Tick) -> Self {
        Self {
            timestamp: tick.timestamp,
            price: tick.price,
            volume: tick.volume,
            liquidity: tick.liquidity_level,
            spread: (tick.ask - tick.bid).abs(),
            exchange_id: tick.exchange_id.clone(),
        }
    }
}

/// The oracle's verdict for one observation. `Hold` is a valid verdict for
/// any or all inputs.
#[derive(Debug, Clone)]
pub struct ScoredAction {
    pub kind: ActionKind,
    pub volume: Decimal,
    pub price: Decimal,
    pub timestamp: i64,
    /// Model confidence in [0, 1]; consumers clamp before use.
    pub confidence: f64,
    pub exchange_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleStatus {
    /// Model still loading; delegated runs must be rejected, not silently
    /// rerouted to the deterministic path.
    NotReady,
    Ready,
}

/// Capability contract for external action scoring.
#[async_trait]
pub trait ScoringOracle: Send + Sync {
    /// Current readiness. Checked by the orchestrator before every
    /// delegated run.
    fn status(&self) -> OracleStatus;

    /// Score the newest observation of `history` (ordered oldest first,
    /// bounded by the configured history limit).
    async fn score(&self, history: &[Observation]) -> anyhow::Result<ScoredAction>;
}
