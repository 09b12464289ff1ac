//! Per-run simulation context

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::Config;
use crate::impact::ImpactModel;
use crate::types::Tick;

/// Everything a run needs that must not leak across runs.
///
/// Constructed once per pipeline invocation and passed explicitly to each
/// stage; in particular the per-exchange impact factors live here so they
/// are drawn exactly once per run rather than re-randomized per call or
/// shared through module state.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub config: Config,
    pub impact_model: ImpactModel,
}

impl SimulationContext {
    /// Seed a context for the exchanges present in the tick set.
    pub fn for_run(config: &Config, ticks: &[Tick]) -> Self {
        let exchanges: BTreeSet<&str> = ticks.iter().map(|t| t.exchange_id.as_str()).collect();
        Self {
            config: config.clone(),
            impact_model: ImpactModel::seeded(exchanges),
        }
    }

    /// Context with fixed impact factors, for deterministic tests.
    pub fn with_impact_model(config: &Config, impact_model: ImpactModel) -> Self {
        Self {
            config: config.clone(),
            impact_model,
        }
    }
}

/// Cooperative cancellation flag for oracle-backed runs.
///
/// Checked between observations, bounding worst-case latency to one oracle
/// call after `cancel`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
