use stock_watch_wasm::domain::watchlist::{CategoryFilter, Market};
use stock_watch_wasm::infrastructure::mock::fixtures;

#[test]
fn all_returns_the_full_set() {
    assert_eq!(fixtures::stocks_for(CategoryFilter::All).len(), 10);
}

#[test]
fn watchlist_is_the_position_subset() {
    let codes: Vec<String> = fixtures::stocks_for(CategoryFilter::Watchlist)
        .iter()
        .map(|s| s.code.value().to_string())
        .collect();
    assert_eq!(codes, ["300059", "600519", "159380", "159622"]);
}

#[test]
fn market_filters_select_by_listing() {
    let domestic = fixtures::stocks_for(CategoryFilter::DomesticA);
    assert_eq!(domestic.len(), 8);
    assert!(domestic.iter().all(|s| s.market == Market::DomesticA));

    let hk = fixtures::stocks_for(CategoryFilter::HongKong);
    assert_eq!(hk.len(), 1);
    assert_eq!(hk[0].code.value(), "00700");
    assert_eq!(hk[0].market.badge(), Some("HK"));

    let us = fixtures::stocks_for(CategoryFilter::Us);
    assert_eq!(us.len(), 1);
    assert_eq!(us[0].code.value(), "AAPL");
    assert_eq!(us[0].market.badge(), Some("US"));
}

#[test]
fn fixtures_are_deterministic() {
    assert_eq!(
        fixtures::stocks_for(CategoryFilter::All),
        fixtures::stocks_for(CategoryFilter::All)
    );
}

#[test]
fn fixture_snapshots_are_coherent() {
    for stock in fixtures::stocks_for(CategoryFilter::All) {
        assert!(stock.price_range_valid(), "{} has high < low", stock.code.value());
        assert!(stock.change_sign_consistent(), "{} has inconsistent change", stock.code.value());
    }
}
