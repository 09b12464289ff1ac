//! Per-exchange quadratic market impact model

use rand::Rng;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::config::{IMPACT_FACTOR_MAX, IMPACT_FACTOR_MIN};

/// Fallback factor for exchanges not present at seeding time: the midpoint
/// of the configured range.
const DEFAULT_IMPACT_FACTOR: Decimal = dec!(0.002);

/// Quadratic impact cost model with one factor per exchange.
///
/// Factors are drawn once when the model is seeded and persist for the
/// lifetime of a simulation run; `impact` itself is a pure function of the
/// seeded factors. Quadratic growth penalizes large single trades
/// superlinearly, which is the property the execution simulator's optimal
/// volume formula exploits.
#[derive(Debug, Clone)]
pub struct ImpactModel {
    factors: HashMap<String, Decimal>,
}

impl ImpactModel {
    /// Draw one random factor per exchange from
    /// [`IMPACT_FACTOR_MIN`, `IMPACT_FACTOR_MAX`).
    pub fn seeded<'a, I>(exchanges: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rng = rand::rng();
        let factors = exchanges
            .into_iter()
            .map(|exchange| {
                let factor = rng.random_range(IMPACT_FACTOR_MIN..IMPACT_FACTOR_MAX);
                (
                    exchange.to_string(),
                    Decimal::from_f64(factor).unwrap_or(DEFAULT_IMPACT_FACTOR),
                )
            })
            .collect();
        Self { factors }
    }

    /// Build a model from fixed factors.
    pub fn with_factors(factors: HashMap<String, Decimal>) -> Self {
        Self { factors }
    }

    pub fn factor(&self, exchange: &str) -> Decimal {
        self.factors
            .get(exchange)
            .copied()
            .unwrap_or(DEFAULT_IMPACT_FACTOR)
    }

    /// Per-unit impact of trading `volume` on `exchange`: factor * volume^2.
    pub fn impact(&self, exchange: &str, volume: Decimal) -> Decimal {
        self.factor(exchange) * volume * volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_model() -> ImpactModel {
        let mut factors = HashMap::new();
        factors.insert("Exchange_1".to_string(), dec!(0.002));
        ImpactModel::with_factors(factors)
    }

    #[test]
    fn impact_is_quadratic_in_volume() {
        let model = fixed_model();
        let base = model.impact("Exchange_1", dec!(5));
        let doubled = model.impact("Exchange_1", dec!(10));
        assert_eq!(doubled, base * dec!(4));
    }

    #[test]
    fn impact_is_deterministic_given_factors() {
        let model = fixed_model();
        assert_eq!(
            model.impact("Exchange_1", dec!(7)),
            model.impact("Exchange_1", dec!(7))
        );
    }

    #[test]
    fn seeded_factors_stay_in_range_and_persist() {
        let model = ImpactModel::seeded(["A", "B", "C"]);
        for exchange in ["A", "B", "C"] {
            let factor = model.factor(exchange);
            assert!(factor >= Decimal::from_f64(IMPACT_FACTOR_MIN).unwrap());
            assert!(factor <= Decimal::from_f64(IMPACT_FACTOR_MAX).unwrap());
            // repeated lookups never re-randomize
            assert_eq!(model.factor(exchange), factor);
        }
    }

    #[test]
    fn unseeded_exchange_falls_back_to_midpoint() {
        let model = fixed_model();
        assert_eq!(model.factor("Unknown"), DEFAULT_IMPACT_FACTOR);
    }
}
