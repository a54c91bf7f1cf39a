use strum::IntoEnumIterator;

use stock_watch_wasm::domain::watchlist::Section;
use stock_watch_wasm::presentation::navigation::{
    BottomNavItem, Route, find_bottom_nav_index_by_route,
};

#[test]
fn routes_round_trip_through_their_paths() {
    let routes = [
        Route::Home,
        Route::Community,
        Route::Stocks,
        Route::Market,
        Route::Wealth,
        Route::Trade,
        Route::StocksTab(Section::Fund),
        Route::StocksTab(Section::Portfolio),
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

#[test]
fn section_routes_carry_the_section_name() {
    assert_eq!(Route::StocksTab(Section::Fund).path(), "stocks/tab/fund");
    assert_eq!(Route::parse("stocks/tab/nonsense"), None);
}

#[test]
fn bottom_nav_index_defaults_to_stocks() {
    assert_eq!(find_bottom_nav_index_by_route(Some("home")), 0);
    assert_eq!(find_bottom_nav_index_by_route(Some("community/feed")), 1);
    assert_eq!(find_bottom_nav_index_by_route(Some("stocks/tab/fund")), 2);
    assert_eq!(find_bottom_nav_index_by_route(Some("market")), 3);
    assert_eq!(find_bottom_nav_index_by_route(Some("wealth")), 4);
    assert_eq!(find_bottom_nav_index_by_route(Some("trade")), 5);
    assert_eq!(find_bottom_nav_index_by_route(Some("unknown")), 2);
    assert_eq!(find_bottom_nav_index_by_route(None), 2);
}

#[test]
fn every_nav_item_maps_onto_its_route() {
    for item in BottomNavItem::iter() {
        assert_eq!(item.route().path(), item.as_ref());
    }
}
