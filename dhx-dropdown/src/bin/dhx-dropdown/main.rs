//! Entry point for the dhx-dropdown demo binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use dhx_dropdown::DropdownConfig;

fn main() -> Result<()> {
    let args = args::parse_args()?;

    // An explicit --config must load; the default location may be absent.
    let config = match &args.config {
        Some(path) => DropdownConfig::load_from(path)?,
        None => DropdownConfig::load_default()?,
    };
    let config = args.apply(config);

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    let log_file = tracing_setup::init(&config.logging)?;

    log::info!("Starting dhx-dropdown");
    if let Some(path) = log_file {
        log::info!("Logging to {}", path.display());
    }

    dhx_dropdown::launch(config)
}
