//! A decorative six-section navigation die.
//!
//! Loads the config, initializes logging, and hands control to the
//! windowed event loop.

use clap::Parser;
use tracing::{info, warn};

use tumble_config::{CliArgs, Config, default_config_dir};
use tumble_log::init_logging;
use tumble_nav::Section;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    let start_section = args.section.as_deref().map(|id| {
        let section = Section::resolve(id);
        if section.id() != id {
            warn!(requested = id, "unknown section, starting on {}", section.id());
        }
        section
    });

    info!(
        width = config.window.width,
        height = config.window.height,
        vsync = config.window.vsync,
        "starting tumble"
    );

    tumble_app::run(config, start_section);
}
