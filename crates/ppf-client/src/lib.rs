//! # ppf-client - Backend API Client
//!
//! Talks to the Probepaket Finder HTTP backend (`/api/products`,
//! `/api/colors/{product}`, `/api/search`, `/api/refresh`).
//!
//! Depends on [`ppf_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Services
//! - [`CatalogService`] - Product list, colors per product, data refresh
//! - [`SearchService`] - Package search by product/color pairs and finishing
//!
//! ### HTTP Implementation
//! - [`HttpFinderClient`] - reqwest-backed implementation of both services
//!
//! ### Protocol
//! - [`protocol`] - Wire envelopes (`success`/`error`) for every endpoint

pub mod client;
pub mod protocol;
pub mod services;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::HttpFinderClient;
pub use protocol::{Envelope, SearchRequest};
pub use services::{
    CatalogService, LocalCatalogService, LocalSearchService, ProductCatalog, SearchOutcome,
    SearchService,
};
