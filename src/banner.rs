use colored::Colorize;

use crate::config::TourConfig;
use crate::logging;

/// Common start-up for a demo binary: settings, diagnostics, title.
pub fn start(title: &str) -> TourConfig {
    let config = TourConfig::embedded().unwrap_or_else(|err| {
        eprintln!("  [WARN] {err}, using defaults");
        TourConfig::default()
    });
    config.apply();
    logging::init(&config);
    println!("{}", format!("=== {title} ===").bold().cyan());
    config
}

/// Print a section heading.
pub fn section(title: &str) {
    println!("\n{}", format!("--- {title} ---").yellow());
}
