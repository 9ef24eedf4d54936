// Common types and utilities shared by the filters

pub mod types;
pub mod utils;

pub use types::*;
