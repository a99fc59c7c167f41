//! Probepaket Finder - terminal client for the sample package search
//!
//! The `ppf` binary runs the interactive finder from [`ppf_tui`] or, with a
//! subcommand, a single headless lookup.

pub mod cli;
pub mod headless;

pub use cli::{Args, Command};
pub use headless::{execute, HeadlessOutput};
