//! Search result view models
//!
//! Shared by the TUI result list and the headless text output.

use ppf_client::SearchOutcome;
use ppf_core::{PackageRecord, PackageStatus, SearchPair};

/// Shown in place of a missing package number
pub const MISSING_NUMBER: &str = "N/A";

/// Results of one completed search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub packages: Vec<PackageRecord>,
    /// Criteria the backend searched for
    pub criteria: Vec<SearchPair>,
}

impl SearchResults {
    /// Build from a backend outcome; when the backend echoed no criteria,
    /// the submitted ones are shown instead.
    pub fn from_outcome(outcome: SearchOutcome, submitted: &[SearchPair]) -> Self {
        let criteria = if outcome.criteria.is_empty() {
            submitted.to_vec()
        } else {
            outcome.criteria
        };
        Self {
            packages: outcome.packages,
            criteria,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// `Suche nach: Shirt (Blau), Cap (Rot)`
    pub fn summary(&self) -> String {
        let criteria: Vec<String> = self.criteria.iter().map(ToString::to_string).collect();
        format!("Suche nach: {}", criteria.join(", "))
    }

    /// `3 Pakete gefunden`
    pub fn count_label(&self) -> String {
        format!("{} Pakete gefunden", self.packages.len())
    }

    pub fn cards(&self) -> Vec<PackageCard> {
        self.packages.iter().map(PackageCard::from).collect()
    }
}

/// Display-ready form of a [`PackageRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCard {
    /// `#1017` or `#N/A`
    pub title: String,
    pub element: String,
    pub status: PackageStatus,
    pub status_text: String,
    pub products: Vec<String>,
    pub finishings: Vec<String>,
    pub delivery_note: Option<String>,
}

impl From<&PackageRecord> for PackageCard {
    fn from(record: &PackageRecord) -> Self {
        let number = record
            .number
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(MISSING_NUMBER);

        Self {
            title: format!("#{}", number),
            element: record.element.clone().unwrap_or_default(),
            status: record.status(),
            status_text: record.status_text(),
            products: record.product_lines(),
            finishings: record.finishing_labels().to_vec(),
            delivery_note: record.delivery_note_url().map(str::to_string),
        }
    }
}

impl PackageCard {
    /// Plain-text rendering, one line per field
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{}  [{}]", self.title, self.status_text)];
        if !self.element.is_empty() {
            lines.push(format!("  {}", self.element));
        }
        lines.extend(self.products.iter().map(|p| format!("  • {}", p)));
        if !self.finishings.is_empty() {
            lines.push(format!("  Veredelungen: {}", self.finishings.join(", ")));
        }
        if let Some(url) = &self.delivery_note {
            lines.push(format!("  Lieferschein: {}", url));
        }
        lines
    }
}
