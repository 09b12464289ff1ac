//! Simulator configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

// Detection constants
/// Maps normalized liquidity in [0, 1] to a tractable unit-volume range.
/// The volume constraint of an opportunity is min(liquidity) * this scale.
pub const LIQUIDITY_VOLUME_SCALE: Decimal = dec!(100);
pub const DECAY_RATE_MIN: f64 = 0.02;
pub const DECAY_RATE_MAX: f64 = 0.07;

// Market impact constants
/// Per-exchange quadratic impact factors are drawn once per run from this
/// range and persisted for the run's lifetime.
pub const IMPACT_FACTOR_MIN: f64 = 0.001;
pub const IMPACT_FACTOR_MAX: f64 = 0.003;

// Execution constants
pub const DEFAULT_HOLD_PROBABILITY: f64 = 0.3;
/// Hold actions are offset this far past the opportunity timestamp.
pub const HOLD_ACTION_OFFSET_MS: i64 = 30_000;

// Aggregation constants
/// Assumed capital base = mean per-trade volume * this multiplier.
pub const DEFAULT_CAPITAL_BASE_MULTIPLIER: Decimal = dec!(100);

// Communication synthesis constants
pub const DEFAULT_MESSAGE_COUNT: usize = 100;
pub const MAX_MESSAGE_LATENCY_MS: f64 = 100.0;

// Oracle constants
/// Per-agent observation history is capped at this many entries.
pub const ORACLE_HISTORY_LIMIT: usize = 100;
/// Flat per-unit impact applied to oracle-produced trade actions.
pub const ORACLE_IMPACT_COEFFICIENT: Decimal = dec!(0.01);

// Generator constants
pub const MIN_EXCHANGES: usize = 2;
pub const MAX_EXCHANGES: usize = 8;
pub const MIN_TIME_POINTS: usize = 2;
pub const MAX_TIME_POINTS: usize = 100_000;
pub const DEFAULT_TICK_INTERVAL_MS: i64 = 60_000;

// Snapshot format version, bumped on incompatible layout changes
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub num_exchanges: usize,
    pub num_time_points: usize,
    pub tick_interval_ms: i64,
    pub base_price: Decimal,
    pub message_count: usize,
    pub hold_probability: f64,
    pub capital_base_multiplier: Decimal,
    /// Optional CSV file of ticks; when unset the sample generator runs.
    pub tick_data_file: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            num_exchanges: env::var("NUM_EXCHANGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3)
                .clamp(MIN_EXCHANGES, MAX_EXCHANGES),
            num_time_points: env::var("NUM_TIME_POINTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100)
                .clamp(MIN_TIME_POINTS, MAX_TIME_POINTS),
            tick_interval_ms: env::var("TICK_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
                .max(1),
            base_price: env::var("BASE_PRICE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(50000))
                .max(dec!(1)),
            message_count: env::var("MESSAGE_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MESSAGE_COUNT),
            hold_probability: env::var("HOLD_PROBABILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HOLD_PROBABILITY)
                .clamp(0.0, 1.0),
            capital_base_multiplier: env::var("CAPITAL_BASE_MULTIPLIER")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_CAPITAL_BASE_MULTIPLIER)
                .max(dec!(1)),
            tick_data_file: env::var("TICK_DATA_FILE").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_exchanges: 3,
            num_time_points: 100,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            base_price: dec!(50000),
            message_count: DEFAULT_MESSAGE_COUNT,
            hold_probability: DEFAULT_HOLD_PROBABILITY,
            capital_base_multiplier: DEFAULT_CAPITAL_BASE_MULTIPLIER,
            tick_data_file: None,
        }
    }
}
