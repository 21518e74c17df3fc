//! Run configuration shared by the command line and the report driver

pub mod config;

pub use config::{Config, OutputFormat, Sections};
