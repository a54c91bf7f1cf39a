use serde::{Deserialize, Serialize};

use super::entities::StockRecord;
use super::value_objects::{CategoryFilter, Section, SortKey};

/// Outcome of the most recent data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchOutcome {
    Loading,
    Success { records: Vec<StockRecord> },
    Error { message: String },
}

impl FetchOutcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchOutcome::Loading)
    }

    pub fn records(&self) -> Option<&[StockRecord]> {
        match self {
            FetchOutcome::Success { records } => Some(records),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchOutcome::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// The single source of truth for what the UI should currently display.
/// Owned exclusively by the coordinator; lives for one UI session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistViewState {
    pub active_section: Section,
    pub active_filter: CategoryFilter,
    pub active_sort: SortKey,
    pub fetch_outcome: FetchOutcome,
}

impl WatchlistViewState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Watchlist,
            active_filter: CategoryFilter::All,
            active_sort: SortKey::LatestPrice,
            fetch_outcome: FetchOutcome::Loading,
        }
    }
}

impl Default for WatchlistViewState {
    fn default() -> Self {
        Self::new()
    }
}
