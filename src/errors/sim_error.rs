//! Custom error types for the simulator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("scoring oracle unavailable: {reason}")]
    OracleUnavailable { reason: String },

    #[error("oracle scoring failed at observation {index}: {message}")]
    OracleScoring {
        index: usize,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("run cancelled after scoring {observations_scored} observations")]
    Cancelled { observations_scored: usize },

    #[error("data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("snapshot version mismatch: found v{found}, expected v{expected}")]
    SnapshotVersion { found: u32, expected: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
