//! Trade execution simulation

pub mod simulator;

pub use simulator::*;
