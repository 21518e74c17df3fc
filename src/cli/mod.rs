//! Command-line interface handling

mod args;

pub use args::{parse_args, Args};
