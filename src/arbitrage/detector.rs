//! Cross-exchange arbitrage opportunity detection

use rand::Rng;
use rust_decimal::prelude::*;
use std::collections::HashMap;

use crate::config::{DECAY_RATE_MAX, DECAY_RATE_MIN, LIQUIDITY_VOLUME_SCALE};
use crate::types::{Opportunity, Tick};

/// Scan a tick collection for cross-exchange spread opportunities.
///
/// Ticks are grouped by exact timestamp equality (no tolerance window); for
/// every unordered pair of exchanges present at a timestamp both directional
/// spreads are checked and each strictly positive direction is emitted. On
/// inconsistent input both directions can be positive at once; both are
/// emitted, so callers must tolerate more than one opportunity per exchange
/// pair per timestamp. Output ordering is unspecified.
///
/// An empty tick set yields an empty result, not an error.
pub fn detect_opportunities(ticks: &[Tick]) -> Vec<Opportunity> {
    let mut by_timestamp: HashMap<i64, Vec<&Tick>> = HashMap::new();
    for tick in ticks {
        by_timestamp.entry(tick.timestamp).or_default().push(tick);
    }

    let mut rng = rand::rng();
    let mut opportunities = Vec::new();

    for (&timestamp, group) in &by_timestamp {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                let (a, b) = (group[i], group[j]);
                if a.exchange_id == b.exchange_id {
                    continue;
                }
                if let Some(opp) = directional_opportunity(timestamp, a, b, &mut rng) {
                    opportunities.push(opp);
                }
                if let Some(opp) = directional_opportunity(timestamp, b, a, &mut rng) {
                    opportunities.push(opp);
                }
            }
        }
    }

    opportunities
}

/// Check the buy-on-`buy` / sell-on-`sell` direction of one pair.
fn directional_opportunity(
    timestamp: i64,
    buy: &Tick,
    sell: &Tick,
    rng: &mut impl Rng,
) -> Option<Opportunity> {
    let spread = sell.bid - buy.ask;
    if spread <= Decimal::ZERO {
        return None;
    }

    let volume_constraint =
        buy.liquidity_level.min(sell.liquidity_level) * LIQUIDITY_VOLUME_SCALE;
    let decay_rate = rng.random_range(DECAY_RATE_MIN..DECAY_RATE_MAX);

    Some(Opportunity {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp,
        buy_exchange: buy.exchange_id.clone(),
        sell_exchange: sell.exchange_id.clone(),
        buy_price: buy.ask,
        sell_price: sell.bid,
        spread,
        profit_potential: spread * volume_constraint,
        volume_constraint,
        decay_rate: Decimal::from_f64(decay_rate).unwrap_or_default(),
    })
}
