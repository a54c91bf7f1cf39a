use strum::IntoEnumIterator;

use stock_watch_wasm::application::coordinator::WatchlistCoordinator;
use stock_watch_wasm::domain::watchlist::{CategoryFilter, FetchOutcome};

#[test]
fn every_filter_selection_goes_loading_synchronously() {
    let mut coordinator = WatchlistCoordinator::new();
    for filter in CategoryFilter::iter() {
        let ticket = coordinator.select_filter(filter);
        assert_eq!(coordinator.state().active_filter, filter);
        assert!(coordinator.state().fetch_outcome.is_loading());
        assert_eq!(ticket.filter(), filter);
    }
}

#[test]
fn request_ids_increase_monotonically() {
    let mut coordinator = WatchlistCoordinator::new();
    let first = coordinator.select_filter(CategoryFilter::All);
    let second = coordinator.select_filter(CategoryFilter::HongKong);
    let third = coordinator.select_filter(CategoryFilter::Us);
    assert!(first.request_id() < second.request_id());
    assert!(second.request_id() < third.request_id());
    assert_eq!(coordinator.latest_request_id(), third.request_id());
}

#[test]
fn selecting_a_filter_replaces_a_previous_error() {
    let mut coordinator = WatchlistCoordinator::new();
    let ticket = coordinator.select_filter(CategoryFilter::All);
    coordinator.apply_fetch_result(
        ticket,
        Err(stock_watch_wasm::domain::errors::FetchError::new("boom")),
    );
    assert!(matches!(coordinator.state().fetch_outcome, FetchOutcome::Error { .. }));

    coordinator.select_filter(CategoryFilter::Watchlist);
    assert!(coordinator.state().fetch_outcome.is_loading());
}
