//! Market impact modeling

pub mod model;

pub use model::*;
