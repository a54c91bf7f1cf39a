use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::errors::FetchError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::watchlist::services::sort_records;
use crate::domain::watchlist::{
    CategoryFilter, FetchOutcome, Section, SortKey, StockRecord, WatchlistViewState,
};

/// Handle tying an in-flight fetch to the `select_filter` call that issued
/// it. Compared against the coordinator's latest request id at resolution
/// time; a stale ticket means a newer filter selection superseded this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    request_id: u64,
    filter: CategoryFilter,
}

impl FetchTicket {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }
}

/// The view-state machine: sole owner and sole mutator of
/// [`WatchlistViewState`] for the lifetime of a UI session.
pub struct WatchlistCoordinator {
    state: WatchlistViewState,
    latest_request: u64,
}

impl WatchlistCoordinator {
    pub fn new() -> Self {
        Self { state: WatchlistViewState::new(), latest_request: 0 }
    }

    pub fn state(&self) -> &WatchlistViewState {
        &self.state
    }

    /// Select a category filter: the outcome flips to `Loading`
    /// synchronously and the returned ticket must accompany the fetch
    /// result back into [`apply_fetch_result`](Self::apply_fetch_result).
    pub fn select_filter(&mut self, filter: CategoryFilter) -> FetchTicket {
        self.latest_request += 1;
        self.state.active_filter = filter;
        self.state.fetch_outcome = FetchOutcome::Loading;

        get_logger().debug(
            LogComponent::Application("Coordinator"),
            &format!("Loading stocks for filter {filter} (request #{})", self.latest_request),
        );

        FetchTicket { request_id: self.latest_request, filter }
    }

    /// Publish a fetch outcome, discarding it when the ticket was
    /// superseded by a later `select_filter` call. Fresh successes are
    /// ordered by the active sort key before publication. Returns whether
    /// the outcome was applied.
    pub fn apply_fetch_result(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<StockRecord>, FetchError>,
    ) -> bool {
        if ticket.request_id != self.latest_request {
            get_logger().debug(
                LogComponent::Application("Coordinator"),
                &format!(
                    "Discarding stale response for request #{} (latest is #{})",
                    ticket.request_id, self.latest_request
                ),
            );
            return false;
        }

        self.state.fetch_outcome = match result {
            Ok(mut records) => {
                sort_records(&mut records, self.state.active_sort);
                get_logger().info(
                    LogComponent::Application("Coordinator"),
                    &format!("✅ Loaded {} stocks for filter {}", records.len(), ticket.filter),
                );
                FetchOutcome::Success { records }
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Application("Coordinator"),
                    &format!("❌ Fetch failed for filter {}: {}", ticket.filter, error),
                );
                FetchOutcome::Error { message: error.into_message() }
            }
        };
        true
    }

    /// Record the sort key; reorder the held records in place when a
    /// successful fetch is on display. Otherwise the preference applies to
    /// the next successful fetch.
    pub fn select_sort(&mut self, key: SortKey) {
        self.state.active_sort = key;
        if let FetchOutcome::Success { records } = &mut self.state.fetch_outcome {
            sort_records(records, key);
        }
    }

    /// Record the top-level section. Never triggers a fetch: Fund and
    /// Portfolio are static placeholders owned by the presentation layer.
    pub fn select_section(&mut self, section: Section) {
        get_logger().debug(
            LogComponent::Application("Coordinator"),
            &format!("Switching section to {section}"),
        );
        self.state.active_section = section;
    }

    /// Id of the most recently issued request, for observability.
    pub fn latest_request_id(&self) -> u64 {
        self.latest_request
    }
}

impl Default for WatchlistCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// Global coordinator instance (thread-local for WASM)
thread_local! {
    static GLOBAL_COORDINATOR: Rc<RefCell<WatchlistCoordinator>> =
        Rc::new(RefCell::new(WatchlistCoordinator::new()));
}

/// Shared handle to the session-global coordinator
pub fn global_coordinator() -> Rc<RefCell<WatchlistCoordinator>> {
    GLOBAL_COORDINATOR.with(Rc::clone)
}

/// Read access to the session-global coordinator
pub fn with_global_coordinator<F, R>(f: F) -> R
where
    F: FnOnce(&WatchlistCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| f(&global.borrow()))
}

/// Mutable access to the session-global coordinator
pub fn with_global_coordinator_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut WatchlistCoordinator) -> R,
{
    GLOBAL_COORDINATOR.with(|global| f(&mut global.borrow_mut()))
}
