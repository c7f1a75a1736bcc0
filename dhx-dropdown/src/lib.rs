//! dhx-dropdown - a dropdown widget for Dioxus
//!
//! A toggle link with a floating panel. The panel is placed by pairing a
//! corner of the link (the anchor) with a corner of the panel, and closes on
//! outside clicks by asking its owner through `onclickout`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dhx_dropdown::DropdownConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = DropdownConfig::load_default()?;
//!     dhx_dropdown::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! The logic lives in two pure pieces that do not depend on Dioxus:
//!
//! 1. `position` computes the panel offset and `transform-origin`
//! 2. `outside_click` is the listener lifecycle state machine, talking to the
//!    document through the `ClickListeners` trait
//!
//! `webview` implements `ClickListeners` with `document::eval`, `hooks` glues
//! both pieces to signals, and `components::Dropdown` renders the widget.

use anyhow::Result;

// Public library modules
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod outside_click;
pub mod position;
pub mod style;
pub mod webview;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use components::Dropdown;
pub use config::DropdownConfig;
pub use error::DropdownError;
pub use position::{
    compute_position, Alignment, Dimensions, Horizontal, Placement, PositionResult, Vertical,
};

/// Stylesheet for the widget and the demo page.
pub const STYLESHEET: &str = include_str!("../assets/dropdown.css");

/// Launch the demo desktop application.
///
/// Opens one window hosting a single dropdown configured from
/// `config.dropdown`.
pub fn launch(config: DropdownConfig) -> Result<()> {
    log::info!(
        "launching demo: position `{}`, animation `{}`",
        config.dropdown.position,
        config.dropdown.animation
    );

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(config.dropdown)
        .launch(app::App);

    Ok(())
}
