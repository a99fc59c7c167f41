//! Headless mode - one backend call per invocation, printed as text or JSON
//!
//! Uses the same service traits, pair validation and card formatting as the
//! TUI, so scripted lookups see exactly what the form would show.
//!
//! # JSON Format
//!
//! One object per invocation with a `command` tag:
//!
//! ```json
//! {"command":"colors","product":"Shirt","colors":["Blau","Rot"]}
//! {"command":"search","criteria":[{"product":"Shirt","color":"Blau"}],"count":1,"packages":[...]}
//! ```

use std::io::Write;

use chrono::NaiveDateTime;
use color_eyre::eyre::{eyre, Result};
use serde::Serialize;
use tracing::{debug, info};

use ppf_app::handler::{
    LOAD_COLORS_FAILED, LOAD_PRODUCTS_FAILED, REFRESH_FAILED, REFRESH_SUCCEEDED, SEARCH_FAILED,
};
use ppf_app::{SearchFieldManager, SearchResults};
use ppf_client::{CatalogService, SearchService};
use ppf_core::{format_last_update, FinishingOption, PackageRecord, SearchPair};

use crate::cli::Command;

/// Result of one headless command
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HeadlessOutput {
    Products {
        products: Vec<String>,
        last_update: Option<NaiveDateTime>,
    },
    Colors {
        product: String,
        colors: Vec<String>,
    },
    Search {
        criteria: Vec<SearchPair>,
        count: usize,
        packages: Vec<PackageRecord>,
    },
    Refresh {
        last_update: Option<NaiveDateTime>,
    },
}

impl HeadlessOutput {
    /// Write as a single JSON line
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write as human-readable text
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            HeadlessOutput::Products {
                products,
                last_update,
            } => {
                for product in products {
                    writeln!(out, "{}", product)?;
                }
                writeln!(
                    out,
                    "\nLetzte Aktualisierung: {}",
                    format_last_update(last_update.as_ref())
                )?;
            }
            HeadlessOutput::Colors { colors, .. } => {
                for color in colors {
                    writeln!(out, "{}", color)?;
                }
            }
            HeadlessOutput::Search {
                criteria, packages, ..
            } => {
                let results = SearchResults {
                    packages: packages.clone(),
                    criteria: criteria.clone(),
                };
                writeln!(out, "{}", results.summary())?;
                writeln!(out, "{}", results.count_label())?;
                if results.is_empty() {
                    writeln!(out, "\nKeine passenden Probepakete gefunden.")?;
                }
                for card in results.cards() {
                    writeln!(out)?;
                    for line in card.to_lines() {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
            HeadlessOutput::Refresh { last_update } => {
                writeln!(out, "{}", REFRESH_SUCCEEDED)?;
                writeln!(
                    out,
                    "Letzte Aktualisierung: {}",
                    format_last_update(last_update.as_ref())
                )?;
            }
        }
        Ok(())
    }

    pub fn write<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            self.write_json(out)?;
        } else {
            self.write_text(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Run one headless command against `backend`.
///
/// `Command::InitConfig` touches no backend and is handled by the caller.
pub async fn execute<B>(command: &Command, backend: &B) -> Result<HeadlessOutput>
where
    B: CatalogService + SearchService,
{
    debug!("Headless command: {:?}", command);

    match command {
        Command::Products => {
            let catalog = backend
                .products()
                .await
                .map_err(|e| eyre!("{}{}", LOAD_PRODUCTS_FAILED, e))?;
            Ok(HeadlessOutput::Products {
                products: catalog.products,
                last_update: catalog.last_update,
            })
        }
        Command::Colors { product } => {
            let colors = backend
                .colors(product)
                .await
                .map_err(|e| eyre!("{}{}", LOAD_COLORS_FAILED, e))?;
            Ok(HeadlessOutput::Colors {
                product: product.clone(),
                colors,
            })
        }
        Command::Search {
            criteria,
            finishing,
        } => search(backend, criteria, finishing).await,
        Command::Refresh => {
            let last_update = backend
                .refresh()
                .await
                .map_err(|e| eyre!("{}{}", REFRESH_FAILED, e))?;
            info!("Backend data refreshed");
            Ok(HeadlessOutput::Refresh { last_update })
        }
        Command::InitConfig => Err(eyre!("init-config does not query the backend")),
    }
}

async fn search<B>(
    backend: &B,
    criteria: &[SearchPair],
    finishing: &[FinishingOption],
) -> Result<HeadlessOutput>
where
    B: SearchService,
{
    // Same limits as the form: one to four complete pairs
    let pairs = SearchFieldManager::with_pairs(criteria)?.validated_pairs()?;

    // Finishing goes out in canonical order without duplicates
    let finishing: Vec<FinishingOption> = FinishingOption::ALL
        .into_iter()
        .filter(|opt| finishing.contains(opt))
        .collect();

    let outcome = backend
        .search(&pairs, &finishing)
        .await
        .map_err(|e| eyre!("{}{}", SEARCH_FAILED, e))?;
    let results = SearchResults::from_outcome(outcome, &pairs);
    info!("Headless search found {} packages", results.len());

    Ok(HeadlessOutput::Search {
        count: results.len(),
        criteria: results.criteria,
        packages: results.packages,
    })
}
