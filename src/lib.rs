//! Inspect sfnt fonts (TrueType, OpenType and collections) and report their
//! tables, metrics, cmap contents and Unicode coverage as text or CSV tables.

pub mod cli;
pub mod error;
pub mod facts;
pub mod font;
pub mod models;
pub mod report;
pub mod reporter;
pub mod unicode;
pub mod utils;

pub use error::{Error, Result};
