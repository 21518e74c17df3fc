//! Unicode block and script reference data

pub mod index;

pub use index::{UnicodeCoverageIndex, NO_BLOCK, UNKNOWN_SCRIPT};
