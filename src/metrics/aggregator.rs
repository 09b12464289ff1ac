//! Performance metric aggregation

use rust_decimal::prelude::*;
use std::collections::BTreeSet;

use crate::types::{ActionKind, AgentAction, PerformanceMetrics};
use crate::utils::{mean, population_std_dev};

/// Reduce a completed action set into summary metrics.
///
/// Pure function of its inputs: running it twice over the same action set
/// yields identical metrics. Profit, volume, success rate, Sharpe and
/// drawdown are computed over realizing (sell) actions only; impact cost is
/// charged over the full set, buy legs included. Drawdown walks the
/// realizing actions in the order given, so callers wanting a time-ordered
/// drawdown must pass actions in time order.
///
/// Every division-by-zero case (no realizing actions, zero variance, zero
/// capital base) is defined as zero rather than NaN.
pub fn aggregate_metrics(
    actions: &[AgentAction],
    capital_base_multiplier: Decimal,
) -> PerformanceMetrics {
    let sells: Vec<&AgentAction> = actions
        .iter()
        .filter(|a| a.kind == ActionKind::Sell)
        .collect();

    let total_profit: Decimal = sells.iter().map(|a| a.profit).sum();
    let total_volume: Decimal = sells.iter().map(|a| a.volume).sum();
    let total_impact_cost: Decimal = actions.iter().map(|a| a.impact * a.volume).sum();
    let net_profit = total_profit - total_impact_cost;

    let success_rate = if sells.is_empty() {
        0.0
    } else {
        let successful = sells.iter().filter(|a| a.net_profit > Decimal::ZERO).count();
        successful as f64 / sells.len() as f64
    };

    let timestamps: BTreeSet<i64> = actions.iter().map(|a| a.timestamp).collect();
    let avg_execution_time_ms = if timestamps.len() > 1 {
        let first = *timestamps.first().unwrap_or(&0);
        let last = *timestamps.last().unwrap_or(&0);
        (last - first) as f64 / timestamps.len() as f64
    } else {
        0.0
    };

    let net_profits: Vec<f64> = sells
        .iter()
        .map(|a| a.net_profit.to_f64().unwrap_or(0.0))
        .collect();
    let std_dev = population_std_dev(&net_profits);
    let sharpe_ratio = if net_profits.is_empty() || std_dev == 0.0 {
        0.0
    } else {
        mean(&net_profits) / std_dev
    };

    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;
    for action in &sells {
        cumulative += action.net_profit;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = peak - cumulative;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    let return_on_capital = if sells.is_empty() {
        Decimal::ZERO
    } else {
        let avg_volume = total_volume / Decimal::from(sells.len());
        let capital_base = avg_volume * capital_base_multiplier;
        if capital_base > Decimal::ZERO {
            net_profit / capital_base
        } else {
            Decimal::ZERO
        }
    };

    PerformanceMetrics {
        total_profit,
        total_volume,
        total_impact_cost,
        net_profit,
        success_rate,
        avg_execution_time_ms,
        sharpe_ratio,
        max_drawdown,
        return_on_capital,
        num_opportunities: sells.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CAPITAL_BASE_MULTIPLIER;
    use rust_decimal_macros::dec;

    fn sell(timestamp: i64, volume: Decimal, profit: Decimal, net: Decimal) -> AgentAction {
        AgentAction {
            timestamp,
            agent: "Agent_B".to_string(),
            exchange: "B".to_string(),
            kind: ActionKind::Sell,
            volume,
            price: dec!(100),
            profit,
            impact: dec!(0.01),
            net_profit: net,
        }
    }

    fn buy(timestamp: i64, volume: Decimal, impact: Decimal) -> AgentAction {
        AgentAction {
            timestamp,
            agent: "Agent_A".to_string(),
            exchange: "A".to_string(),
            kind: ActionKind::Buy,
            volume,
            price: dec!(100),
            profit: Decimal::ZERO,
            impact,
            net_profit: Decimal::ZERO,
        }
    }

    #[test]
    fn zero_realizing_actions_degrade_to_zeroes() {
        let actions = vec![buy(1_000, dec!(5), dec!(0.1))];
        let metrics = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(metrics.success_rate, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert_eq!(metrics.max_drawdown, Decimal::ZERO);
        assert_eq!(metrics.num_opportunities, 0);
        assert_eq!(metrics.return_on_capital, Decimal::ZERO);
        // the lone buy still pays impact
        assert_eq!(metrics.total_impact_cost, dec!(0.5));
        assert_eq!(metrics.net_profit, dec!(-0.5));
    }

    #[test]
    fn empty_input_yields_default_metrics() {
        let metrics = aggregate_metrics(&[], DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(metrics, PerformanceMetrics::default());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let actions = vec![
            buy(1_000, dec!(2), dec!(0.004)),
            sell(1_000, dec!(2), dec!(10), dec!(9.5)),
            sell(2_000, dec!(3), dec!(12), dec!(-1)),
        ];
        let first = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        let second = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(first, second);
    }

    #[test]
    fn impact_cost_includes_buy_legs() {
        let actions = vec![
            buy(1_000, dec!(10), dec!(0.2)),
            sell(1_000, dec!(10), dec!(50), dec!(46)),
        ];
        let metrics = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        // 0.2 * 10 from the buy plus 0.01 * 10 from the sell
        assert_eq!(metrics.total_impact_cost, dec!(2.1));
        assert_eq!(metrics.net_profit, dec!(50) - dec!(2.1));
    }

    #[test]
    fn drawdown_tracks_peak_to_trough() {
        // cumulative: 5, 2, 3 -> peak 5, deepest trough 2, drawdown 3
        let actions = vec![
            sell(1_000, dec!(1), dec!(5), dec!(5)),
            sell(2_000, dec!(1), dec!(1), dec!(-3)),
            sell(3_000, dec!(1), dec!(2), dec!(1)),
        ];
        let metrics = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(metrics.max_drawdown, dec!(3));
    }

    #[test]
    fn constant_profits_have_zero_sharpe() {
        let actions = vec![
            sell(1_000, dec!(1), dec!(5), dec!(4)),
            sell(2_000, dec!(1), dec!(5), dec!(4)),
        ];
        let metrics = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn success_rate_counts_positive_net_only() {
        let actions = vec![
            sell(1_000, dec!(1), dec!(5), dec!(4)),
            sell(2_000, dec!(1), dec!(5), dec!(-1)),
            sell(3_000, dec!(1), dec!(5), dec!(2)),
            sell(4_000, dec!(1), dec!(5), dec!(0)),
        ];
        let metrics = aggregate_metrics(&actions, DEFAULT_CAPITAL_BASE_MULTIPLIER);
        assert_eq!(metrics.success_rate, 0.5);
        assert_eq!(metrics.num_opportunities, 4);
    }

    #[test]
    fn return_on_capital_uses_mean_volume_base() {
        let actions = vec![sell(1_000, dec!(4), dec!(10), dec!(9.96))];
        let metrics = aggregate_metrics(&actions, dec!(100));
        // capital base = 4 * 100, net = 10 - 0.01*4
        assert_eq!(metrics.return_on_capital, dec!(9.96) / dec!(400));
    }
}
