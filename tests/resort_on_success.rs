use stock_watch_wasm::application::coordinator::WatchlistCoordinator;
use stock_watch_wasm::domain::watchlist::{CategoryFilter, Market, SortKey, StockCode, StockRecord};

fn record(code: &str, price: f64) -> StockRecord {
    StockRecord {
        code: StockCode::from(code),
        name: code.to_string(),
        price,
        change: 0.0,
        change_percent: 0.0,
        volume: 0,
        current_volume: 0,
        amount: 0.0,
        volume_ratio: 0.0,
        high: price,
        low: price,
        amplitude: 0.0,
        turnover_rate: 0.0,
        market: Market::DomesticA,
    }
}

#[test]
fn selecting_a_sort_reorders_held_records_in_place() {
    let mut coordinator = WatchlistCoordinator::new();
    let ticket = coordinator.select_filter(CategoryFilter::All);
    // Incoming order deliberately ascending by price.
    assert!(coordinator.apply_fetch_result(ticket, Ok(vec![record("A", 10.0), record("B", 20.0)])));

    coordinator.select_sort(SortKey::LatestPrice);

    assert_eq!(coordinator.state().active_sort, SortKey::LatestPrice);
    let records = coordinator.state().fetch_outcome.records().expect("success expected");
    let codes: Vec<&str> = records.iter().map(|r| r.code.value()).collect();
    assert_eq!(codes, ["B", "A"]);
}

#[test]
fn sort_selection_keeps_outcome_success() {
    let mut coordinator = WatchlistCoordinator::new();
    let ticket = coordinator.select_filter(CategoryFilter::All);
    assert!(coordinator.apply_fetch_result(ticket, Ok(vec![record("A", 10.0)])));

    coordinator.select_sort(SortKey::Volume);
    assert!(coordinator.state().fetch_outcome.records().is_some());
}
