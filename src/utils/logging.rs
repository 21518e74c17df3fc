use log::LevelFilter;

use crate::models::Config;

/// Install the console logger; debug mode lowers the level to `debug`
///
/// `RUST_LOG` still overrides the level chosen here.
pub fn init_logging(config: &Config) {
    let level = if config.debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
