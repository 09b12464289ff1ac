//! Derived series for analysis views
//!
//! Shape-only transforms backing charts: cumulative profit over time and a
//! smoothed per-episode reward curve. Decorative in the same sense as
//! [`crate::comms`]: no downstream stage reads these back.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::{ActionKind, AgentAction};

#[derive(Debug, Clone, Serialize)]
pub struct CumulativeProfitPoint {
    pub timestamp: i64,
    pub exchange: String,
    pub cumulative_net_profit: Decimal,
}

/// Running cumulative net profit over the realizing actions, in time order.
pub fn cumulative_profit_series(actions: &[AgentAction]) -> Vec<CumulativeProfitPoint> {
    let mut sells: Vec<&AgentAction> = actions
        .iter()
        .filter(|a| a.kind == ActionKind::Sell)
        .collect();
    sells.sort_by_key(|a| a.timestamp);

    let mut cumulative = Decimal::ZERO;
    sells
        .into_iter()
        .map(|action| {
            cumulative += action.net_profit;
            CumulativeProfitPoint {
                timestamp: action.timestamp,
                exchange: action.exchange.clone(),
                cumulative_net_profit: cumulative,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardPoint {
    /// 1-based episode index; one episode per distinct action timestamp.
    pub episode: usize,
    pub timestamp: i64,
    pub total_reward: Decimal,
    /// Total reward over the agents active in the episode.
    pub avg_reward: Decimal,
    /// Windowed mean of `avg_reward`, the convergence curve.
    pub smoothed_reward: f64,
}

/// Per-episode reward curve with a rolling-mean smoothing window.
///
/// Each distinct timestamp is one episode; its reward is the summed net
/// profit of that episode's actions, averaged over the agents active in it.
pub fn reward_convergence_series(actions: &[AgentAction], window: usize) -> Vec<RewardPoint> {
    let mut episodes: BTreeMap<i64, Vec<&AgentAction>> = BTreeMap::new();
    for action in actions {
        episodes.entry(action.timestamp).or_default().push(action);
    }

    let mut smoother = RollingMean::new(window.max(1));
    episodes
        .into_iter()
        .enumerate()
        .map(|(idx, (timestamp, episode_actions))| {
            let total_reward: Decimal = episode_actions.iter().map(|a| a.net_profit).sum();
            let agents: BTreeSet<&str> =
                episode_actions.iter().map(|a| a.agent.as_str()).collect();
            let avg_reward = if agents.is_empty() {
                Decimal::ZERO
            } else {
                total_reward / Decimal::from(agents.len())
            };

            smoother.push(avg_reward.to_f64().unwrap_or(0.0));

            RewardPoint {
                episode: idx + 1,
                timestamp,
                total_reward,
                avg_reward,
                smoothed_reward: smoother.mean(),
            }
        })
        .collect()
}

/// Fixed-capacity rolling mean over the most recent samples.
struct RollingMean {
    window: VecDeque<f64>,
    capacity: usize,
}

impl RollingMean {
    fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, value: f64) {
        self.window.push_back(value);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    fn mean(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.window.iter().sum::<f64>() / self.window.len() as f64
    }
}
