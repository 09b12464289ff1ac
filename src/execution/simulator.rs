//! Impact-aware trade execution simulation

use rand::Rng;
use rust_decimal::prelude::*;
use tracing::debug;

use crate::config::HOLD_ACTION_OFFSET_MS;
use crate::impact::ImpactModel;
use crate::types::{ActionKind, AgentAction, Opportunity};

/// Profit-maximizing trade size under the quadratic impact model.
///
/// Maximizes profit(q) = q * spread - lambda * q^2 where lambda is the
/// combined per-exchange factor, giving the closed form
/// q* = spread / (2 * lambda), then clamps to the opportunity's
/// liquidity-derived volume constraint. Exact for the quadratic model; no
/// numeric search needed.
pub fn optimal_volume(opportunity: &Opportunity, impact_model: &ImpactModel) -> Decimal {
    let combined_factor = impact_model.factor(&opportunity.buy_exchange)
        + impact_model.factor(&opportunity.sell_exchange);

    if combined_factor <= Decimal::ZERO {
        // impact-free market: take everything the constraint allows
        return opportunity.volume_constraint.max(Decimal::ZERO);
    }

    let unconstrained = opportunity.spread / (combined_factor * Decimal::TWO);
    unconstrained
        .min(opportunity.volume_constraint)
        .max(Decimal::ZERO)
}

/// Synthesize the paired agent actions for one opportunity.
///
/// Always the buy leg then the sell leg; profit is realized on the sell leg
/// net of both legs' impact cost. With probability `hold_probability` a
/// third idle "hold" action for the buying agent follows 30 seconds later
/// (flavor data, not decision-relevant).
pub fn simulate_opportunity(
    opportunity: &Opportunity,
    impact_model: &ImpactModel,
    hold_probability: f64,
    rng: &mut impl Rng,
) -> Vec<AgentAction> {
    let volume = optimal_volume(opportunity, impact_model);

    let impact_buy = impact_model.impact(&opportunity.buy_exchange, volume);
    let impact_sell = impact_model.impact(&opportunity.sell_exchange, volume);

    let gross_profit = opportunity.spread * volume;
    let net_profit = gross_profit - (impact_buy + impact_sell) * volume;

    debug!(
        opportunity_id = %opportunity.id,
        %volume,
        %net_profit,
        "simulated execution"
    );

    let mut actions = vec![
        AgentAction {
            timestamp: opportunity.timestamp,
            agent: AgentAction::agent_for(&opportunity.buy_exchange),
            exchange: opportunity.buy_exchange.clone(),
            kind: ActionKind::Buy,
            volume,
            price: opportunity.buy_price,
            profit: Decimal::ZERO,
            impact: impact_buy,
            net_profit: Decimal::ZERO,
        },
        AgentAction {
            timestamp: opportunity.timestamp,
            agent: AgentAction::agent_for(&opportunity.sell_exchange),
            exchange: opportunity.sell_exchange.clone(),
            kind: ActionKind::Sell,
            volume,
            price: opportunity.sell_price,
            profit: gross_profit,
            impact: impact_sell,
            net_profit,
        },
    ];

    if rng.random_bool(hold_probability) {
        actions.push(AgentAction {
            timestamp: opportunity.timestamp + HOLD_ACTION_OFFSET_MS,
            agent: AgentAction::agent_for(&opportunity.buy_exchange),
            exchange: opportunity.buy_exchange.clone(),
            kind: ActionKind::Hold,
            volume: Decimal::ZERO,
            price: opportunity.buy_price,
            profit: Decimal::ZERO,
            impact: Decimal::ZERO,
            net_profit: Decimal::ZERO,
        });
    }

    actions
}

/// Run the simulator over a whole opportunity set.
pub fn simulate_actions(
    opportunities: &[Opportunity],
    impact_model: &ImpactModel,
    hold_probability: f64,
) -> Vec<AgentAction> {
    let mut rng = rand::rng();
    opportunities
        .iter()
        .flat_map(|opp| simulate_opportunity(opp, impact_model, hold_probability, &mut rng))
        .collect()
}
