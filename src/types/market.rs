//! Market tick types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One exchange's market snapshot at one instant.
///
/// Immutable once ingested. `bid <= price <= ask` is the expected shape but
/// is not enforced: imported data may violate it and downstream stages must
/// degrade rather than panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Epoch milliseconds, monotonic per exchange.
    pub timestamp: i64,
    pub exchange_id: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    /// Normalized liquidity in [0, 1].
    pub liquidity_level: Decimal,
}
