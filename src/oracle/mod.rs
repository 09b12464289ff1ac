//! Scoring oracle capability

pub mod scoring;

pub use scoring::*;
