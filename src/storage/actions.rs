//! Agent action artifact storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::types::AgentAction;

/// Append a run's actions to the day's JSONL artifact.
pub fn save_actions(run_id: &str, actions: &[AgentAction]) -> Result<()> {
    let filename = format!(
        "output/actions/actions_{}.jsonl",
        Utc::now().format("%Y-%m-%d")
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    for action in actions {
        writeln!(file, "{}", serde_json::to_string(action)?)?;
    }

    info!(
        run_id = %run_id,
        count = actions.len(),
        "Saved simulated agent actions"
    );

    Ok(())
}
