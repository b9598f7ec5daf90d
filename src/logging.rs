//! `log` setup for the browser.
//!
//! On wasm32 records go to the devtools console through `console_log`.
//! Native builds (unit tests) install nothing, so `log` macros are no-ops.

use log::Level;

/// Parse a level name, falling back to `Info` for anything unrecognized.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::Info)
}

/// Install the console logger at `level`. A second call keeps the first
/// logger and only moves the max level.
#[cfg(target_arch = "wasm32")]
pub fn install(level: Level) {
    if let Err(e) = console_log::init_with_level(level) {
        log::set_max_level(level.to_level_filter());
        log::debug!("console logger already installed ({e}); level now {level}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install(_level: Level) {}
