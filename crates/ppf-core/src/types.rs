//! Core domain type definitions

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Application Phase
// ─────────────────────────────────────────────────────────────────

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the initial product list
    #[default]
    Initializing,
    /// Form is usable
    Ready,
    /// Shutting down
    Quitting,
}

// ─────────────────────────────────────────────────────────────────
// Search Criteria
// ─────────────────────────────────────────────────────────────────

/// One complete search criterion: a product in a color.
///
/// Serialized as `{"product": ..., "color": ...}`, the shape of both
/// `search_criteria` in the search request and the echoed `search_params`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchPair {
    pub product: String,
    pub color: String,
}

impl SearchPair {
    pub fn new(product: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            color: color.into(),
        }
    }
}

impl std::fmt::Display for SearchPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.product, self.color)
    }
}

/// Finishing (Veredelung) a package must support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishingOption {
    ScreenPrint,
    DigitalPrint,
    Embroidery,
}

impl FinishingOption {
    /// All options, in the order they are sent to the backend
    pub const ALL: [FinishingOption; 3] = [
        FinishingOption::ScreenPrint,
        FinishingOption::DigitalPrint,
        FinishingOption::Embroidery,
    ];

    /// Wire value in `veredelung_required`
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishingOption::ScreenPrint => "Siebdruck",
            FinishingOption::DigitalPrint => "Digitaldruck",
            FinishingOption::Embroidery => "Stick",
        }
    }

    /// Parse a wire value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for FinishingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Packages
// ─────────────────────────────────────────────────────────────────

/// One product contained in a sample package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    #[serde(rename = "produkt", default)]
    pub product: String,
    #[serde(rename = "groesse", default)]
    pub size: String,
    #[serde(rename = "farbe", default)]
    pub color: String,
}

impl ProductEntry {
    /// `Shirt (L) - Blau`
    pub fn display_line(&self) -> String {
        format!("{} ({}) - {}", self.product, self.size, self.color)
    }
}

/// Sample package (Probepaket) as returned by `/api/search`.
///
/// Every field is optional on the wire; older backends send a single
/// `produkt`/`groesse`/`farbe` triple instead of the `produkte` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(rename = "nummer", default)]
    pub number: Option<String>,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "produkte", default)]
    pub products: Option<Vec<ProductEntry>>,
    #[serde(rename = "produkt", default)]
    pub product: Option<String>,
    #[serde(rename = "groesse", default)]
    pub size: Option<String>,
    #[serde(rename = "farbe", default)]
    pub color: Option<String>,
    #[serde(rename = "veredelungen", default)]
    pub finishings: Option<Vec<String>>,
    #[serde(rename = "lieferschein", default)]
    pub delivery_note: Option<String>,
}

impl PackageRecord {
    pub fn status(&self) -> PackageStatus {
        PackageStatus::classify(self.status.as_deref())
    }

    /// Status text shown on the card
    pub fn status_text(&self) -> String {
        PackageStatus::display_text(self.status.as_deref())
    }

    /// Lines describing the contained products.
    ///
    /// Prefers the `produkte` list, falls back to the single triple when all
    /// three parts are present, then to the element text.
    pub fn product_lines(&self) -> Vec<String> {
        if let Some(products) = self.products.as_ref().filter(|p| !p.is_empty()) {
            return products.iter().map(ProductEntry::display_line).collect();
        }

        match (
            non_empty(self.product.as_deref()),
            non_empty(self.size.as_deref()),
            non_empty(self.color.as_deref()),
        ) {
            (Some(product), Some(size), Some(color)) => {
                vec![format!("{} ({}) - {}", product, size, color)]
            }
            _ => match non_empty(self.element.as_deref()) {
                Some(element) => vec![element.to_string()],
                None => Vec::new(),
            },
        }
    }

    /// Finishing labels, empty when the backend sent none
    pub fn finishing_labels(&self) -> &[String] {
        self.finishings.as_deref().unwrap_or(&[])
    }

    /// Delivery-note link, ignoring empty strings
    pub fn delivery_note_url(&self) -> Option<&str> {
        non_empty(self.delivery_note.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Package availability derived from the free-text status column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    Available,
    Reserved,
    Sent,
    Unknown,
}

impl PackageStatus {
    /// Case-insensitive keyword match; first match wins in the order
    /// lager, reserviert, versendet/gesendet.
    pub fn classify(status: Option<&str>) -> Self {
        let Some(status) = status.filter(|s| !s.is_empty()) else {
            return PackageStatus::Unknown;
        };

        let lower = status.to_lowercase();
        if lower.contains("lager") {
            PackageStatus::Available
        } else if lower.contains("reserviert") {
            PackageStatus::Reserved
        } else if lower.contains("versendet") || lower.contains("gesendet") {
            PackageStatus::Sent
        } else {
            PackageStatus::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Available => "Verfügbar",
            PackageStatus::Reserved => "Reserviert",
            PackageStatus::Sent => "Versendet",
            PackageStatus::Unknown => "Unbekannt",
        }
    }

    /// Stable key for styling (`available`, `reserved`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            PackageStatus::Available => "available",
            PackageStatus::Reserved => "reserved",
            PackageStatus::Sent => "sent",
            PackageStatus::Unknown => "unknown",
        }
    }

    /// Label for a raw status; unmatched non-empty text is shown verbatim.
    pub fn display_text(status: Option<&str>) -> String {
        match (Self::classify(status), status) {
            (PackageStatus::Unknown, Some(raw)) if !raw.is_empty() => raw.to_string(),
            (classified, _) => classified.label().to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Timestamps
// ─────────────────────────────────────────────────────────────────

/// Parse the backend's `last_update` (ISO-8601, usually without zone)
pub fn parse_last_update(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// `01.05.2024, 12:34:56`, or `Nie` when the data was never loaded
pub fn format_last_update(timestamp: Option<&NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => ts.format("%d.%m.%Y, %H:%M:%S").to_string(),
        None => "Nie".to_string(),
    }
}
