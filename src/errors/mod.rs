//! Error handling

pub mod sim_error;

pub use sim_error::*;
