//! Service traits for the two backend collaborators
//!
//! The app crate only depends on these traits, so the TEA loop can be driven
//! by the HTTP client in production and by an in-memory backend in tests.

use chrono::NaiveDateTime;

use ppf_core::prelude::*;
use ppf_core::{FinishingOption, PackageRecord, SearchPair};

/// Product list plus the time the backend last loaded its data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    pub products: Vec<String>,
    pub last_update: Option<NaiveDateTime>,
}

/// Matching packages plus the criteria the backend echoed back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub packages: Vec<PackageRecord>,
    pub criteria: Vec<SearchPair>,
}

/// Product and color lookups
#[trait_variant::make(CatalogService: Send)]
pub trait LocalCatalogService {
    /// All selectable products
    async fn products(&self) -> Result<ProductCatalog>;

    /// Colors available for one product
    async fn colors(&self, product: &str) -> Result<Vec<String>>;

    /// Ask the backend to reload its data, returning the new load time
    async fn refresh(&self) -> Result<Option<NaiveDateTime>>;
}

/// Package search
#[trait_variant::make(SearchService: Send)]
pub trait LocalSearchService {
    async fn search(
        &self,
        criteria: &[SearchPair],
        finishing: &[FinishingOption],
    ) -> Result<SearchOutcome>;
}
