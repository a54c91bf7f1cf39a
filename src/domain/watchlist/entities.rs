pub use super::value_objects::{Market, StockCode};
use serde::{Deserialize, Serialize};

/// Domain entity - immutable snapshot of one instrument's market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub code: StockCode,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub current_volume: i64,
    pub amount: f64,
    pub volume_ratio: f64,
    pub high: f64,
    pub low: f64,
    pub amplitude: f64,
    pub turnover_rate: f64,
    pub market: Market,
}

impl StockRecord {
    pub fn is_gaining(&self) -> bool {
        self.change >= 0.0
    }

    /// `high >= low` must hold for a coherent snapshot.
    pub fn price_range_valid(&self) -> bool {
        self.high >= self.low
    }

    /// `change` and `change_percent` are independently supplied; they are
    /// expected to agree in sign but nothing downstream relies on it.
    pub fn change_sign_consistent(&self) -> bool {
        self.change == 0.0
            || self.change_percent == 0.0
            || (self.change > 0.0) == (self.change_percent > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(change: f64, change_percent: f64, high: f64, low: f64) -> StockRecord {
        StockRecord {
            code: StockCode::from("000001"),
            name: "上证指数".to_string(),
            price: 3380.48,
            change,
            change_percent,
            volume: 150_000_000,
            current_volume: 5_000_000,
            amount: 2_000_000_000.0,
            volume_ratio: 1.2,
            high,
            low,
            amplitude: 0.6,
            turnover_rate: 1.5,
            market: Market::DomesticA,
        }
    }

    #[test]
    fn price_range_requires_high_above_low() {
        assert!(record(12.9, 0.38, 3390.25, 3370.15).price_range_valid());
        assert!(!record(12.9, 0.38, 3370.15, 3390.25).price_range_valid());
    }

    #[test]
    fn sign_consistency_tolerates_zero() {
        assert!(record(0.0, 0.38, 10.0, 9.0).change_sign_consistent());
        assert!(record(-2.48, -1.17, 10.0, 9.0).change_sign_consistent());
        assert!(!record(-2.48, 1.17, 10.0, 9.0).change_sign_consistent());
    }

    #[test]
    fn codes_are_uppercased() {
        assert_eq!(StockCode::from("aapl").value(), "AAPL");
        assert!(StockCode::new(String::new()).is_err());
    }
}
