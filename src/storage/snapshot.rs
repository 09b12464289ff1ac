//! Versioned simulation state snapshots
//!
//! The serialized snapshot is the sole handoff artifact between a pipeline
//! run and its consumers. The envelope carries a format version so a stale
//! snapshot fails loudly instead of deserializing into garbage.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::SNAPSHOT_VERSION;
use crate::errors::{SimError, SimResult};
use crate::types::SimulationState;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    state: SimulationState,
}

/// Serialize a state snapshot with its version tag.
pub fn encode_snapshot(state: &SimulationState) -> Result<String> {
    let envelope = SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        state: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Decode a snapshot, rejecting unknown format versions before touching the
/// state payload.
pub fn decode_snapshot(input: &str) -> SimResult<SimulationState> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| SimError::DataParsing {
            context: "snapshot is not valid JSON".to_string(),
            source: Some(e.into()),
        })?;

    let found = value
        .get("version")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| SimError::DataParsing {
            context: "snapshot has no version tag".to_string(),
            source: None,
        })? as u32;
    if found != SNAPSHOT_VERSION {
        return Err(SimError::SnapshotVersion {
            found,
            expected: SNAPSHOT_VERSION,
        });
    }

    let envelope: SnapshotEnvelope =
        serde_json::from_value(value).map_err(|e| SimError::DataParsing {
            context: "snapshot payload does not match the state schema".to_string(),
            source: Some(e.into()),
        })?;
    Ok(envelope.state)
}

/// Write a snapshot under `output/snapshots/`, one file per run.
pub fn save_snapshot(state: &SimulationState) -> Result<PathBuf> {
    let filename = PathBuf::from(format!(
        "output/snapshots/simulation_{}.json",
        Utc::now().format("%Y-%m-%d_%H%M%S")
    ));

    fs::write(&filename, encode_snapshot(state)?)?;

    info!(
        run_id = %state.run_id,
        path = %filename.display(),
        actions = state.actions.len(),
        "Saved simulation snapshot"
    );

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips() {
        let state = SimulationState::empty();
        let encoded = encode_snapshot(&state).unwrap();
        let decoded = decode_snapshot(&encoded).unwrap();
        assert_eq!(decoded.run_id, state.run_id);
        assert!(!decoded.data_loaded);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let state = SimulationState::empty();
        let encoded = encode_snapshot(&state).unwrap();
        let tampered = encoded.replacen(
            &format!("\"version\": {SNAPSHOT_VERSION}"),
            "\"version\": 999",
            1,
        );
        assert!(matches!(
            decode_snapshot(&tampered),
            Err(SimError::SnapshotVersion { found: 999, .. })
        ));
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        assert!(matches!(
            decode_snapshot("not json"),
            Err(SimError::DataParsing { .. })
        ));
        assert!(matches!(
            decode_snapshot("{}"),
            Err(SimError::DataParsing { .. })
        ));
    }
}
