//! Inter-agent communication synthesis

pub mod synthesizer;

pub use synthesizer::*;
