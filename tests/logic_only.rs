#![cfg(feature = "logic-only")]

use stock_watch_wasm::format_utils::{format_number_f64, format_number_i64, format_percent};
use stock_watch_wasm::presentation::strings::StringCatalog;

#[test]
fn large_numbers_collapse_to_catalog_suffixes() {
    let catalog = StringCatalog::default();
    assert_eq!(format_number_i64(&catalog, 9_999), "9999");
    assert_eq!(format_number_i64(&catalog, 10_000), "1.00万");
    assert_eq!(format_number_i64(&catalog, 150_000_000), "1.50亿");
    assert_eq!(format_number_i64(&catalog, 5_000_000), "500.00万");
    assert_eq!(format_number_f64(&catalog, 2_000_000_000.0), "20.00亿");
    assert_eq!(format_number_f64(&catalog, 45_000_000.0), "4500.00万");
    assert_eq!(format_number_f64(&catalog, 1.038), "1.038");
}

#[test]
fn percents_carry_an_explicit_sign_for_gains() {
    assert_eq!(format_percent(0.38), "+0.38%");
    assert_eq!(format_percent(0.0), "+0%");
    assert_eq!(format_percent(-1.17), "-1.17%");
}
