//! Derived analysis series

pub mod series;

pub use series::*;
