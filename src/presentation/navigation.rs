use std::str::FromStr;

use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::watchlist::Section;

/// Bottom navigation destinations, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum BottomNavItem {
    #[strum(serialize = "home")]
    Home,
    #[strum(serialize = "community")]
    Community,
    #[strum(serialize = "stocks")]
    Stocks,
    #[strum(serialize = "market")]
    Market,
    #[strum(serialize = "wealth")]
    Wealth,
    #[strum(serialize = "trade")]
    Trade,
}

impl BottomNavItem {
    pub fn icon(&self) -> &'static str {
        match self {
            BottomNavItem::Home => "🏠",
            BottomNavItem::Community => "👥",
            BottomNavItem::Stocks => "📋",
            BottomNavItem::Market => "🔍",
            BottomNavItem::Wealth => "💰",
            BottomNavItem::Trade => "💹",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            BottomNavItem::Home => Route::Home,
            BottomNavItem::Community => Route::Community,
            BottomNavItem::Stocks => Route::Stocks,
            BottomNavItem::Market => Route::Market,
            BottomNavItem::Wealth => Route::Wealth,
            BottomNavItem::Trade => Route::Trade,
        }
    }
}

/// Symbolic route names the router maps to screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Community,
    Stocks,
    Market,
    Wealth,
    Trade,
    /// Watchlist screen opened on a specific top-level section.
    StocksTab(Section),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Community => "community".to_string(),
            Route::Stocks => "stocks".to_string(),
            Route::Market => "market".to_string(),
            Route::Wealth => "wealth".to_string(),
            Route::Trade => "trade".to_string(),
            Route::StocksTab(section) => format!("stocks/tab/{}", section.as_ref()),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        if let Some(section) = path.strip_prefix("stocks/tab/") {
            return Section::from_str(section).ok().map(Route::StocksTab);
        }
        match path {
            "home" => Some(Route::Home),
            "community" => Some(Route::Community),
            "stocks" => Some(Route::Stocks),
            "market" => Some(Route::Market),
            "wealth" => Some(Route::Wealth),
            "trade" => Some(Route::Trade),
            _ => None,
        }
    }
}

/// Bottom-navigation index for a route string; unknown routes land on the
/// stocks tab.
pub fn find_bottom_nav_index_by_route(route: Option<&str>) -> usize {
    match route {
        Some(r) if r.starts_with("home") => 0,
        Some(r) if r.starts_with("community") => 1,
        Some(r) if r.starts_with("stocks") => 2,
        Some(r) if r.starts_with("market") => 3,
        Some(r) if r.starts_with("wealth") => 4,
        Some(r) if r.starts_with("trade") => 5,
        _ => 2,
    }
}
