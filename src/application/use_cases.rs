use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{Either, LocalBoxFuture, select};

use crate::application::coordinator::WatchlistCoordinator;
use crate::domain::errors::FetchError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::watchlist::CategoryFilter;
use crate::domain::watchlist::repositories::StockDataProvider;

/// Use Case: load stocks for a category filter.
///
/// Issues a ticket through the coordinator, awaits the provider on the
/// single WASM lane, and publishes the outcome under the staleness guard.
/// Overlapping executions are fine; only the latest ticket's outcome
/// lands.
pub struct LoadStocksUseCase<P: StockDataProvider> {
    provider: Rc<P>,
    coordinator: Rc<RefCell<WatchlistCoordinator>>,
    timeout: Option<Duration>,
}

impl<P: StockDataProvider + 'static> LoadStocksUseCase<P> {
    pub fn new(provider: Rc<P>, coordinator: Rc<RefCell<WatchlistCoordinator>>) -> Self {
        Self { provider, coordinator, timeout: None }
    }

    /// Cap the wait on the provider. No timeout is configured by default;
    /// an elapsed timeout publishes `Error("timeout")` like any failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves to whether the outcome was applied (false = superseded).
    ///
    /// The `Loading` transition happens synchronously at the call site;
    /// only the provider wait is deferred to the returned future.
    pub fn execute(&self, filter: CategoryFilter) -> LocalBoxFuture<'static, bool> {
        let ticket = self.coordinator.borrow_mut().select_filter(filter);

        let provider = Rc::clone(&self.provider);
        let coordinator = Rc::clone(&self.coordinator);
        let timeout = self.timeout;

        Box::pin(async move {
            let fetch = provider.fetch_stocks(filter);
            let result = match timeout {
                Some(limit) => {
                    let deadline = Box::pin(gloo_timers::future::sleep(limit));
                    match select(fetch, deadline).await {
                        Either::Left((result, _)) => result,
                        Either::Right(((), _)) => {
                            get_logger().warn(
                                LogComponent::Application("LoadStocks"),
                                &format!("Fetch for {filter} exceeded {limit:?}"),
                            );
                            Err(FetchError::new("timeout"))
                        }
                    }
                }
                None => fetch.await,
            };

            coordinator.borrow_mut().apply_fetch_result(ticket, result)
        })
    }
}
