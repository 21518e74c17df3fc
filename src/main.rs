use std::process;

use fontinfo::cli::parse_args;
use fontinfo::models::Config;
use fontinfo::reporter::process_file;
use fontinfo::utils::init_logging;

fn main() {
    let args = parse_args();
    let config = Config::from_args(&args);
    init_logging(&config);

    log::debug!("Debug mode enabled");
    log::debug!("Using output format: {}", config.output);

    match process_file(&config) {
        Ok(0) => {
            eprintln!(
                "Error: no font in '{}' could be loaded",
                config.font_path.display()
            );
            process::exit(1);
        }
        Ok(count) => log::debug!("Reported on {} font(s)", count),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
