//! Simulation state snapshot types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AgentAction, AgentCommunication, PerformanceMetrics, Tick};

/// Readiness of the external scoring oracle at the time a state was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleReadiness {
    pub ready: bool,
    /// Observations scored in the run that produced this state. Zero for the
    /// deterministic pipeline.
    pub observations_scored: usize,
    pub updated_at: DateTime<Utc>,
}

impl OracleReadiness {
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            observations_scored: 0,
            updated_at: Utc::now(),
        }
    }

    pub fn ready(observations_scored: usize) -> Self {
        Self {
            ready: true,
            observations_scored,
            updated_at: Utc::now(),
        }
    }
}

/// Complete snapshot of one pipeline run.
///
/// Treated as a value: built once per run and replaced wholesale, so readers
/// never observe a partially updated state. `communications` is decorative
/// output (see [`crate::comms`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub run_id: String,
    pub data_loaded: bool,
    pub raw_data: Vec<Tick>,
    pub actions: Vec<AgentAction>,
    pub communications: Vec<AgentCommunication>,
    pub metrics: Option<PerformanceMetrics>,
    pub oracle: OracleReadiness,
}

impl SimulationState {
    /// The empty pre-run state.
    pub fn empty() -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            data_loaded: false,
            raw_data: Vec::new(),
            actions: Vec::new(),
            communications: Vec::new(),
            metrics: None,
            oracle: OracleReadiness::not_ready(),
        }
    }
}
