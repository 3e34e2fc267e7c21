//! Saved searches: a JSON file holding past result sets with the criteria
//! that produced them. The API key is never written.

use std::path::Path;

use anyhow::Context;
use bizfind_core::{NormalizedBusinessRecord, SearchCriteria};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SavedCriteria {
    pub business_type: String,
    pub location: String,
    pub radius_meters: u32,
    pub min_rating: f64,
    pub open_now: bool,
    pub max_price_level: u8,
    pub keyword: Option<String>,
}

impl From<&SearchCriteria> for SavedCriteria {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            business_type: criteria.business_type.clone(),
            location: criteria.location.clone(),
            radius_meters: criteria.radius_meters,
            min_rating: criteria.min_rating,
            open_now: criteria.open_now,
            max_price_level: criteria.max_price_level,
            keyword: criteria.keyword().map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SavedSearch {
    pub saved_at: DateTime<Utc>,
    pub criteria: SavedCriteria,
    pub results: Vec<NormalizedBusinessRecord>,
}

impl SavedSearch {
    pub(crate) fn new(criteria: &SearchCriteria, results: Vec<NormalizedBusinessRecord>) -> Self {
        Self {
            saved_at: Utc::now(),
            criteria: SavedCriteria::from(criteria),
            results,
        }
    }

    fn label(&self) -> String {
        format!(
            "{} in {}",
            self.criteria.business_type, self.criteria.location
        )
    }
}

/// Reads every saved search. A missing file means nothing has been saved.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<SavedSearch>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Appends one saved search, rewriting the whole file.
///
/// # Errors
///
/// Returns an error if the existing file is unreadable or the new file
/// cannot be written.
pub(crate) fn append(path: &Path, entry: SavedSearch) -> anyhow::Result<()> {
    let mut searches = load(path)?;
    searches.push(entry);
    let body = serde_json::to_string_pretty(&searches)?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(count = searches.len(), path = %path.display(), "saved search appended");
    Ok(())
}

/// List saved searches, or print the one at the 1-based `show` index.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or `show` is out of range.
pub(crate) fn run_saved(path: &Path, show: Option<usize>) -> anyhow::Result<()> {
    let searches = load(path)?;

    if searches.is_empty() {
        println!("no saved searches; run `search --save` first");
        return Ok(());
    }

    if let Some(index) = show {
        let search = index
            .checked_sub(1)
            .and_then(|i| searches.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "saved search {index} not found; {} saved search(es) available",
                    searches.len()
                )
            })?;
        println!(
            "Search from {}: {}",
            search.saved_at.format("%Y-%m-%d %H:%M:%S UTC"),
            search.label()
        );
        println!();
        render::print_table(&search.results);
        return Ok(());
    }

    println!("{:<4}{:<25}{:<9}QUERY", "#", "SAVED AT", "RESULTS");
    for (i, search) in searches.iter().enumerate() {
        println!(
            "{:<4}{:<25}{:<9}{}",
            i + 1,
            search.saved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            search.results.len(),
            search.label()
        );
    }
    Ok(())
}
