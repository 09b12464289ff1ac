//! Property tests for the detection and execution pipeline

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::collections::HashMap;

use cross_arb_sim::arbitrage::detect_opportunities;
use cross_arb_sim::config::{Config, DEFAULT_CAPITAL_BASE_MULTIPLIER};
use cross_arb_sim::execution::optimal_volume;
use cross_arb_sim::impact::ImpactModel;
use cross_arb_sim::metrics::aggregate_metrics;
use cross_arb_sim::pipeline::{SimulationContext, run_pipeline};
use cross_arb_sim::storage::{export_ticks, import_ticks};
use cross_arb_sim::types::{Opportunity, Tick};

fn dec(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

prop_compose! {
    /// A tick with an arbitrary (possibly crossing) book on a small shared
    /// timestamp grid, so exchange pairs frequently collide in time.
    fn any_tick()(
        slot in 0i64..5,
        exchange in prop::sample::select(vec!["A", "B", "C", "Ex,change"]),
        mid in 90.0f64..110.0,
        half_spread in 0.0f64..2.0,
        volume in 0.1f64..20.0,
        liquidity in 0.0f64..1.0,
    ) -> Tick {
        Tick {
            timestamp: slot * 60_000,
            exchange_id: exchange.to_string(),
            price: dec(mid),
            volume: dec(volume),
            bid: dec(mid - half_spread),
            ask: dec(mid + half_spread),
            liquidity_level: dec(liquidity),
        }
    }
}

prop_compose! {
    /// A tick whose bid stays at or below 100 while its ask stays at or
    /// above 100: no pair of such books can cross in either direction.
    fn non_crossing_tick()(
        slot in 0i64..5,
        exchange in prop::sample::select(vec!["A", "B", "C"]),
        bid_gap in 0.0f64..5.0,
        ask_gap in 0.0f64..5.0,
        volume in 0.1f64..20.0,
        liquidity in 0.0f64..1.0,
    ) -> Tick {
        Tick {
            timestamp: slot * 60_000,
            exchange_id: exchange.to_string(),
            price: dec(100.0),
            volume: dec(volume),
            bid: dec(100.0 - bid_gap),
            ask: dec(100.0 + ask_gap),
            liquidity_level: dec(liquidity),
        }
    }
}

prop_compose! {
    fn any_opportunity()(
        spread in 0.0001f64..50.0,
        constraint in 0.0f64..100.0,
    ) -> Opportunity {
        Opportunity {
            id: "prop".to_string(),
            timestamp: 60_000,
            buy_exchange: "A".to_string(),
            sell_exchange: "B".to_string(),
            buy_price: dec(100.0),
            sell_price: dec(100.0 + spread),
            spread: dec(spread),
            profit_potential: dec(spread) * dec(constraint),
            volume_constraint: dec(constraint),
            decay_rate: dec(0.03),
        }
    }
}

proptest! {
    #[test]
    fn every_emitted_opportunity_has_positive_spread(ticks in prop::collection::vec(any_tick(), 0..30)) {
        for opp in detect_opportunities(&ticks) {
            prop_assert!(opp.spread > Decimal::ZERO);
            prop_assert!(opp.volume_constraint >= Decimal::ZERO);
            prop_assert_ne!(&opp.buy_exchange, &opp.sell_exchange);
            prop_assert_eq!(opp.sell_price - opp.buy_price, opp.spread);
        }
    }

    #[test]
    fn non_crossing_books_never_yield_opportunities(ticks in prop::collection::vec(non_crossing_tick(), 0..30)) {
        prop_assert!(detect_opportunities(&ticks).is_empty());
    }

    #[test]
    fn optimal_volume_stays_within_clamp(
        opp in any_opportunity(),
        factor_a in 0.001f64..0.003,
        factor_b in 0.001f64..0.003,
    ) {
        let mut factors = HashMap::new();
        factors.insert("A".to_string(), dec(factor_a));
        factors.insert("B".to_string(), dec(factor_b));
        let model = ImpactModel::with_factors(factors);

        let volume = optimal_volume(&opp, &model);
        prop_assert!(volume >= Decimal::ZERO);
        prop_assert!(volume <= opp.volume_constraint);
    }

    #[test]
    fn csv_round_trip_reproduces_records(ticks in prop::collection::vec(any_tick(), 0..20)) {
        let imported = import_ticks(&export_ticks(&ticks)).unwrap();
        prop_assert_eq!(imported.skipped_rows, 0);
        prop_assert_eq!(imported.ticks, ticks);
    }

    #[test]
    fn aggregation_is_idempotent_over_pipeline_output(ticks in prop::collection::vec(any_tick(), 0..30)) {
        let mut config = Config::default();
        config.hold_probability = 0.0;
        let mut factors = HashMap::new();
        for exchange in ["A", "B", "C", "Ex,change"] {
            factors.insert(exchange.to_string(), dec(0.002));
        }
        let ctx = SimulationContext::with_impact_model(&config, ImpactModel::with_factors(factors));

        let state = run_pipeline(ticks, &ctx);
        let first = aggregate_metrics(&state.actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        let second = aggregate_metrics(&state.actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        prop_assert_eq!(first, second);
    }
}
