//! Synthetic inter-agent message generation
//!
//! Decorative traffic for visualization layers. Messages are sampled from
//! the action set's agents and timestamps but carry no causal relationship
//! to the actions; nothing downstream may treat them as a source of truth.

use rand::Rng;
use std::collections::BTreeSet;

use crate::config::MAX_MESSAGE_LATENCY_MS;
use crate::types::{AgentAction, AgentCommunication, MessageKind};

/// Sample `message_count` messages over the distinct agents of an action set.
///
/// Sender and receiver are drawn uniformly and always differ; each message
/// borrows its timestamp from a uniformly chosen action. Output is sorted
/// ascending by timestamp. Fewer than two distinct agents (or an empty
/// action set) yields no messages.
pub fn synthesize_communications(
    actions: &[AgentAction],
    message_count: usize,
) -> Vec<AgentCommunication> {
    // BTreeSet for a stable agent ordering regardless of action order
    let agents: Vec<&str> = actions
        .iter()
        .map(|a| a.agent.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if actions.is_empty() || agents.len() < 2 {
        return Vec::new();
    }

    let mut rng = rand::rng();
    let mut messages = Vec::with_capacity(message_count);

    for _ in 0..message_count {
        let from_idx = rng.random_range(0..agents.len());
        let mut to_idx = rng.random_range(0..agents.len());
        while to_idx == from_idx {
            to_idx = rng.random_range(0..agents.len());
        }

        let timestamp = actions[rng.random_range(0..actions.len())].timestamp;
        let kind = random_kind(&mut rng);

        messages.push(AgentCommunication {
            timestamp,
            from_agent: agents[from_idx].to_string(),
            to_agent: agents[to_idx].to_string(),
            kind,
            content: render_content(kind, &mut rng),
            latency_ms: rng.random_range(0.0..MAX_MESSAGE_LATENCY_MS),
        });
    }

    messages.sort_by_key(|m| m.timestamp);
    messages
}

fn random_kind(rng: &mut impl Rng) -> MessageKind {
    match rng.random_range(0..4) {
        0 => MessageKind::PriceUpdate,
        1 => MessageKind::VolumeIntent,
        2 => MessageKind::ExecutionReport,
        _ => MessageKind::LiquidityInfo,
    }
}

fn render_content(kind: MessageKind, rng: &mut impl Rng) -> String {
    match kind {
        MessageKind::PriceUpdate => {
            format!("Price update: {:.2}", 50_000.0 + rng.random_range(0.0..1_000.0))
        }
        MessageKind::VolumeIntent => {
            format!("Intent to trade {} units", rng.random_range(0..=10))
        }
        MessageKind::ExecutionReport => format!(
            "Executed {} units at {:.2}",
            rng.random_range(0..=5),
            50_000.0 + rng.random_range(0.0..1_000.0)
        ),
        MessageKind::LiquidityInfo => {
            format!("Current liquidity: {:.2}", rng.random_range(0.1..1.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionKind;
    use rust_decimal_macros::dec;

    fn action(timestamp: i64, agent: &str) -> AgentAction {
        AgentAction {
            timestamp,
            agent: agent.to_string(),
            exchange: agent.trim_start_matches("Agent_").to_string(),
            kind: ActionKind::Sell,
            volume: dec!(1),
            price: dec!(100),
            profit: dec!(1),
            impact: dec!(0.01),
            net_profit: dec!(0.99),
        }
    }

    #[test]
    fn sender_and_receiver_always_differ() {
        let actions = vec![
            action(1_000, "Agent_A"),
            action(2_000, "Agent_B"),
            action(3_000, "Agent_C"),
        ];
        for message in synthesize_communications(&actions, 200) {
            assert_ne!(message.from_agent, message.to_agent);
        }
    }

    #[test]
    fn output_is_sorted_and_counted() {
        let actions = vec![
            action(5_000, "Agent_A"),
            action(1_000, "Agent_B"),
            action(9_000, "Agent_A"),
        ];
        let messages = synthesize_communications(&actions, 50);
        assert_eq!(messages.len(), 50);
        assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn timestamps_borrowed_from_actions() {
        let actions = vec![action(1_000, "Agent_A"), action(2_000, "Agent_B")];
        for message in synthesize_communications(&actions, 30) {
            assert!(message.timestamp == 1_000 || message.timestamp == 2_000);
        }
    }

    #[test]
    fn degenerate_inputs_yield_no_messages() {
        assert!(synthesize_communications(&[], 10).is_empty());
        // a single agent cannot message anyone but itself
        let lonely = vec![action(1_000, "Agent_A"), action(2_000, "Agent_A")];
        assert!(synthesize_communications(&lonely, 10).is_empty());
    }
}
