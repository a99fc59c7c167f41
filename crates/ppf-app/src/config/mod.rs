//! Configuration file parsing for Probepaket Finder
//!
//! Supports `<config_dir>/probepaket-finder/config.toml` with `[backend]`
//! and `[ui]` sections.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME};
pub use types::*;
