use stock_watch_wasm::domain::watchlist::services::sort_records;
use stock_watch_wasm::domain::watchlist::{Market, SortKey, StockCode, StockRecord};

fn record(code: &str, change_percent: f64) -> StockRecord {
    StockRecord {
        code: StockCode::from(code),
        name: code.to_string(),
        price: 1.0,
        change: change_percent,
        change_percent,
        volume: 0,
        current_volume: 0,
        amount: 0.0,
        volume_ratio: 0.0,
        high: 1.0,
        low: 1.0,
        amplitude: 0.0,
        turnover_rate: 0.0,
        market: Market::DomesticA,
    }
}

#[test]
fn change_percent_sorts_descending() {
    let mut records =
        vec![record("A", 0.38), record("B", 0.09), record("C", 0.44), record("D", -1.17)];
    sort_records(&mut records, SortKey::ChangePercent);
    let percents: Vec<f64> = records.iter().map(|r| r.change_percent).collect();
    assert_eq!(percents, [0.44, 0.38, 0.09, -1.17]);
}

#[test]
fn sorting_is_idempotent() {
    let mut records =
        vec![record("A", 0.38), record("B", 0.09), record("C", 0.44), record("D", -1.17)];
    sort_records(&mut records, SortKey::ChangePercent);
    let once = records.clone();
    sort_records(&mut records, SortKey::ChangePercent);
    assert_eq!(records, once);
}

#[test]
fn momentum_leaves_order_untouched() {
    let mut records = vec![record("B", 0.09), record("A", 0.44)];
    let before = records.clone();
    sort_records(&mut records, SortKey::Momentum);
    assert_eq!(records, before);
}
