//! Test utilities for backend services
//!
//! Provides an in-memory backend implementing both service traits, plus
//! helpers for building package records.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDateTime;

use ppf_core::prelude::*;
use ppf_core::{FinishingOption, PackageRecord, ProductEntry, SearchPair};

use crate::services::{CatalogService, ProductCatalog, SearchOutcome, SearchService};

/// Endpoint selector for injected failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Products,
    Colors,
    Search,
    Refresh,
}

/// In-memory backend with canned responses.
///
/// Search returns every configured package and echoes the criteria; it does
/// no matching of its own. Calls to `search` are recorded for assertions.
#[derive(Debug, Default)]
pub struct StaticBackend {
    products: Vec<String>,
    colors: HashMap<String, Vec<String>>,
    packages: Vec<PackageRecord>,
    last_update: Option<NaiveDateTime>,
    failing: HashSet<Endpoint>,
    searches: Mutex<Vec<(Vec<SearchPair>, Vec<FinishingOption>)>>,
}

impl StaticBackend {
    pub fn new(products: &[&str]) -> Self {
        Self {
            products: products.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, product: &str, colors: &[&str]) -> Self {
        self.colors.insert(
            product.to_string(),
            colors.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_packages(mut self, packages: Vec<PackageRecord>) -> Self {
        self.packages = packages;
        self
    }

    pub fn with_last_update(mut self, last_update: NaiveDateTime) -> Self {
        self.last_update = Some(last_update);
        self
    }

    /// Make `endpoint` answer with an application failure
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Searches received so far
    pub fn recorded_searches(&self) -> Vec<(Vec<SearchPair>, Vec<FinishingOption>)> {
        self.searches
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn check(&self, endpoint: Endpoint) -> Result<()> {
        if self.failing.contains(&endpoint) {
            Err(Error::application(format!("{:?} unavailable", endpoint)))
        } else {
            Ok(())
        }
    }
}

impl CatalogService for StaticBackend {
    async fn products(&self) -> Result<ProductCatalog> {
        self.check(Endpoint::Products)?;
        Ok(ProductCatalog {
            products: self.products.clone(),
            last_update: self.last_update,
        })
    }

    async fn colors(&self, product: &str) -> Result<Vec<String>> {
        self.check(Endpoint::Colors)?;
        Ok(self.colors.get(product).cloned().unwrap_or_default())
    }

    async fn refresh(&self) -> Result<Option<NaiveDateTime>> {
        self.check(Endpoint::Refresh)?;
        Ok(self.last_update)
    }
}

impl SearchService for StaticBackend {
    async fn search(
        &self,
        criteria: &[SearchPair],
        finishing: &[FinishingOption],
    ) -> Result<SearchOutcome> {
        if let Ok(mut searches) = self.searches.lock() {
            searches.push((criteria.to_vec(), finishing.to_vec()));
        }
        self.check(Endpoint::Search)?;
        Ok(SearchOutcome {
            packages: self.packages.clone(),
            criteria: criteria.to_vec(),
        })
    }
}

/// Creates a package with one product entry.
///
/// # Arguments
/// * `number` - Package number (`nummer`)
/// * `status` - Raw status text
/// * `product` - `(produkt, groesse, farbe)`
pub fn test_package(number: &str, status: &str, product: (&str, &str, &str)) -> PackageRecord {
    PackageRecord {
        number: Some(number.to_string()),
        element: Some(format!("Probepaket {}", number)),
        status: Some(status.to_string()),
        products: Some(vec![ProductEntry {
            product: product.0.to_string(),
            size: product.1.to_string(),
            color: product.2.to_string(),
        }]),
        ..Default::default()
    }
}
