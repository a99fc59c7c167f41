//! # ppf-core - Core Domain Types
//!
//! Foundation crate for Probepaket Finder. Provides domain types, error
//! handling and logging setup shared by the client, app and TUI crates.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SearchPair`] - One complete product + color search criterion
//! - [`FinishingOption`] - Finishing (Veredelung) filter: Siebdruck, Digitaldruck, Stick
//! - [`PackageRecord`] / [`ProductEntry`] - Sample package as returned by the backend
//! - [`PackageStatus`] - Keyword classification of a package status string
//! - [`Severity`] - Notification severity (info, success, warning, error)
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with network/application/validation taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ppf_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Probepaket Finder crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    format_last_update, parse_last_update, AppPhase, FinishingOption, PackageRecord,
    PackageStatus, ProductEntry, SearchPair, Severity,
};
