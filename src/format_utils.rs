//! Display formatting for table cells. Suffixes come from the injected
//! catalog rather than a global resource lookup.

use crate::presentation::strings::StringCatalog;

const HUNDRED_MILLION: f64 = 100_000_000.0;
const TEN_THOUSAND: f64 = 10_000.0;

pub fn format_number_i64(catalog: &StringCatalog, value: i64) -> String {
    let v = value as f64;
    if v >= HUNDRED_MILLION {
        format!("{:.2}{}", v / HUNDRED_MILLION, catalog.hundred_million_suffix)
    } else if v >= TEN_THOUSAND {
        format!("{:.2}{}", v / TEN_THOUSAND, catalog.ten_thousand_suffix)
    } else {
        value.to_string()
    }
}

pub fn format_number_f64(catalog: &StringCatalog, value: f64) -> String {
    if value >= HUNDRED_MILLION {
        format!("{:.2}{}", value / HUNDRED_MILLION, catalog.hundred_million_suffix)
    } else if value >= TEN_THOUSAND {
        format!("{:.2}{}", value / TEN_THOUSAND, catalog.ten_thousand_suffix)
    } else {
        format!("{value}")
    }
}

/// Non-negative values carry an explicit plus sign.
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 { format!("+{value}%") } else { format!("{value}%") }
}
