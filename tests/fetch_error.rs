use std::rc::Rc;

use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use stock_watch_wasm::application::coordinator::{WatchlistCoordinator, global_coordinator};
use stock_watch_wasm::application::use_cases::LoadStocksUseCase;
use stock_watch_wasm::domain::errors::FetchError;
use stock_watch_wasm::domain::watchlist::repositories::StockDataProvider;
use stock_watch_wasm::domain::watchlist::{CategoryFilter, StockRecord};

/// Provider fixtured to fail every fetch with the same message.
struct FailingProvider {
    message: &'static str,
}

impl StockDataProvider for FailingProvider {
    fn fetch_stocks(
        &self,
        _filter: CategoryFilter,
    ) -> LocalBoxFuture<'static, Result<Vec<StockRecord>, FetchError>> {
        let message = self.message;
        Box::pin(async move { Err(FetchError::new(message)) })
    }
}

#[test]
fn provider_failure_surfaces_verbatim() {
    let mut coordinator = WatchlistCoordinator::new();
    let ticket = coordinator.select_filter(CategoryFilter::HongKong);
    assert!(coordinator.apply_fetch_result(ticket, Err(FetchError::new("timeout"))));
    assert_eq!(coordinator.state().fetch_outcome.error_message(), Some("timeout"));
}

#[test]
fn load_use_case_publishes_the_provider_error() {
    let coordinator = global_coordinator();
    let provider = Rc::new(FailingProvider { message: "timeout" });
    let use_case = LoadStocksUseCase::new(provider, Rc::clone(&coordinator));

    let applied = block_on(use_case.execute(CategoryFilter::HongKong));

    assert!(applied);
    let state = coordinator.borrow().state().clone();
    assert_eq!(state.active_filter, CategoryFilter::HongKong);
    assert_eq!(state.fetch_outcome.error_message(), Some("timeout"));
}
