//! Data persistence and file operations

pub mod actions;
pub mod csv;
pub mod snapshot;

pub use actions::*;
pub use csv::*;
pub use snapshot::*;
