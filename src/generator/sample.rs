//! Synthetic market data generation

use rand::Rng;
use rust_decimal::prelude::*;

use crate::config::Config;
use crate::types::Tick;

/// Generate per-exchange tick streams with enough cross-exchange price noise
/// to surface arbitrage opportunities.
///
/// Prices follow a slow sine around the configured base with per-exchange
/// noise that grows with the exchange index; bid/ask straddle the price by a
/// proportional spread; liquidity is uniform in [0.1, 1.0).
pub fn generate_sample_ticks(config: &Config, start_timestamp: i64) -> Vec<Tick> {
    let exchanges: Vec<String> = (1..=config.num_exchanges)
        .map(|i| format!("Exchange_{i}"))
        .collect();
    let base_price = config.base_price.to_f64().unwrap_or(50_000.0);

    let mut rng = rand::rng();
    let mut ticks = Vec::with_capacity(config.num_exchanges * config.num_time_points);

    for t in 0..config.num_time_points {
        let timestamp = start_timestamp + t as i64 * config.tick_interval_ms;
        let cycle = (t as f64 / 100.0).sin() * 200.0;

        for (idx, exchange) in exchanges.iter().enumerate() {
            let price_noise = (rng.random::<f64>() - 0.5) * 100.0 * (idx + 1) as f64;
            let price = base_price + price_noise + cycle;

            let spread = price * 0.0005 + rng.random::<f64>() * price * 0.001;
            let bid = price - spread / 2.0;
            let ask = price + spread / 2.0;

            let volume = 1.0 + rng.random::<f64>() * 10.0;
            let liquidity = 0.1 + rng.random::<f64>() * 0.9;

            ticks.push(Tick {
                timestamp,
                exchange_id: exchange.clone(),
                price: Decimal::from_f64(price).unwrap_or_default(),
                volume: Decimal::from_f64(volume).unwrap_or_default(),
                bid: Decimal::from_f64(bid).unwrap_or_default(),
                ask: Decimal::from_f64(ask).unwrap_or_default(),
                liquidity_level: Decimal::from_f64(liquidity).unwrap_or_default(),
            });
        }
    }

    ticks
}
