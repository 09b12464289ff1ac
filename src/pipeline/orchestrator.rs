//! Simulation orchestration
//!
//! Two interchangeable action-generation strategies behind one output shape:
//! the deterministic detect → simulate pipeline, and delegation to an
//! external scoring oracle. Both feed the same communication synthesis and
//! metric aggregation stages and produce a structurally identical
//! [`SimulationState`].

use rust_decimal::prelude::*;
use std::collections::HashMap;
use tracing::info;

use crate::arbitrage::detect_opportunities;
use crate::comms::synthesize_communications;
use crate::config::{ORACLE_HISTORY_LIMIT, ORACLE_IMPACT_COEFFICIENT};
use crate::errors::{SimError, SimResult};
use crate::execution::simulate_actions;
use crate::metrics::aggregate_metrics;
use crate::oracle::{Observation, OracleStatus, ScoredAction, ScoringOracle};
use crate::types::{
    ActionKind, AgentAction, OracleReadiness, SimulationState, Tick,
};

use super::{CancelToken, SimulationContext};

/// Run the deterministic pipeline over a tick set.
///
/// Detects opportunities, simulates impact-aware executions, synthesizes
/// decorative message traffic and aggregates metrics into one state value.
/// An empty tick set degrades to an empty state with zero-valued metrics.
pub fn run_pipeline(ticks: Vec<Tick>, ctx: &SimulationContext) -> SimulationState {
    let opportunities = detect_opportunities(&ticks);
    let mut actions = simulate_actions(
        &opportunities,
        &ctx.impact_model,
        ctx.config.hold_probability,
    );
    // time order: the aggregator's drawdown walk expects it and the detector
    // does not guarantee it
    actions.sort_by_key(|a| a.timestamp);

    info!(
        ticks = ticks.len(),
        opportunities = opportunities.len(),
        actions = actions.len(),
        "deterministic pipeline complete"
    );

    finish_state(ticks, actions, ctx, OracleReadiness::not_ready())
}

/// Run the pipeline with action generation delegated to a scoring oracle.
///
/// Observations are scored strictly one at a time in timestamp order, each
/// against its exchange's bounded history; produced actions preserve that
/// order. The oracle must report [`OracleStatus::Ready`] or the run fails
/// with [`SimError::OracleUnavailable`]; falling back to the deterministic
/// path here would silently change semantics, so it never happens.
///
/// Copy-on-success: the state is returned only when every observation
/// scored; a failed or cancelled run yields an error and leaves whatever
/// state the caller holds untouched.
pub async fn run_with_oracle(
    ticks: Vec<Tick>,
    ctx: &SimulationContext,
    oracle: &dyn ScoringOracle,
    cancel: &CancelToken,
) -> SimResult<SimulationState> {
    if oracle.status() != OracleStatus::Ready {
        return Err(SimError::OracleUnavailable {
            reason: "model not loaded".to_string(),
        });
    }

    let mut observations: Vec<Observation> = ticks.iter().map(Observation::from_tick).collect();
    observations.sort_by_key(|o| o.timestamp);

    let mut histories: HashMap<String, Vec<Observation>> = HashMap::new();
    let mut actions = Vec::with_capacity(observations.len());

    for (index, observation) in observations.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(SimError::Cancelled {
                observations_scored: index,
            });
        }

        let history = histories
            .entry(observation.exchange_id.clone())
            .or_default();
        history.push(observation);
        if history.len() > ORACLE_HISTORY_LIMIT {
            history.remove(0);
        }

        let scored = oracle
            .score(history)
            .await
            .map_err(|e| SimError::OracleScoring {
                index,
                message: e.to_string(),
                source: Some(e),
            })?;
        actions.push(scored_to_action(scored));
    }

    let scored_count = actions.len();
    info!(observations = scored_count, "oracle-backed run complete");

    Ok(finish_state(
        ticks,
        actions,
        ctx,
        OracleReadiness::ready(scored_count),
    ))
}

/// Shared tail of both strategies: decoration, aggregation, state assembly.
fn finish_state(
    ticks: Vec<Tick>,
    actions: Vec<AgentAction>,
    ctx: &SimulationContext,
    oracle: OracleReadiness,
) -> SimulationState {
    let communications = synthesize_communications(&actions, ctx.config.message_count);
    let metrics = aggregate_metrics(&actions, ctx.config.capital_base_multiplier);

    SimulationState {
        run_id: uuid::Uuid::new_v4().to_string(),
        data_loaded: !ticks.is_empty(),
        raw_data: ticks,
        actions,
        communications,
        metrics: Some(metrics),
        oracle,
    }
}

/// Map an oracle verdict onto the action record shape.
///
/// Profit is credited on sell verdicts only, scaled by the clamped model
/// confidence; trade verdicts carry a flat per-unit impact coefficient.
fn scored_to_action(scored: ScoredAction) -> AgentAction {
    let confidence =
        Decimal::from_f64(scored.confidence.clamp(0.0, 1.0)).unwrap_or(Decimal::ZERO);

    let profit = if scored.kind == ActionKind::Sell {
        scored.price * scored.volume * confidence
    } else {
        Decimal::ZERO
    };
    let impact = if scored.kind == ActionKind::Hold {
        Decimal::ZERO
    } else {
        ORACLE_IMPACT_COEFFICIENT * scored.volume
    };

    AgentAction {
        timestamp: scored.timestamp,
        agent: AgentAction::agent_for(&scored.exchange_id),
        exchange: scored.exchange_id,
        kind: scored.kind,
        volume: scored.volume,
        price: scored.price,
        profit,
        impact,
        net_profit: profit - impact * scored.volume,
    }
}
