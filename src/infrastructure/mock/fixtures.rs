//! Backing data for the mock provider. Fixed constants; every fetch for a
//! given filter returns the same records.

use crate::domain::watchlist::{CategoryFilter, Market, StockCode, StockRecord};

/// Indices into [`all_stocks`] making up the user's position list.
const WATCHLIST_INDICES: [usize; 4] = [1, 2, 6, 8];

#[allow(clippy::too_many_arguments)]
fn stock(
    code: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: i64,
    current_volume: i64,
    amount: f64,
    volume_ratio: f64,
    high: f64,
    low: f64,
    amplitude: f64,
    turnover_rate: f64,
    market: Market,
) -> StockRecord {
    StockRecord {
        code: StockCode::from(code),
        name: name.to_string(),
        price,
        change,
        change_percent,
        volume,
        current_volume,
        amount,
        volume_ratio,
        high,
        low,
        amplitude,
        turnover_rate,
        market,
    }
}

pub fn all_stocks() -> Vec<StockRecord> {
    vec![
        stock(
            "000001",
            "上证指数",
            3380.48,
            12.90,
            0.38,
            150_000_000,
            5_000_000,
            2_000_000_000.0,
            1.2,
            3390.25,
            3370.15,
            0.6,
            1.5,
            Market::DomesticA,
        ),
        stock(
            "300059",
            "东方财富",
            21.52,
            0.02,
            0.09,
            120_000_000,
            4_000_000,
            1_500_000_000.0,
            1.1,
            21.80,
            21.30,
            2.3,
            2.1,
            Market::DomesticA,
        ),
        stock(
            "600519",
            "贵州茅台",
            1586.00,
            7.02,
            0.44,
            3_000_000,
            100_000,
            4_500_000_000.0,
            0.9,
            1590.00,
            1570.00,
            1.2,
            0.5,
            Market::DomesticA,
        ),
        stock(
            "00700",
            "腾讯控股",
            517.00,
            3.00,
            0.58,
            8_000_000,
            300_000,
            4_000_000_000.0,
            1.0,
            520.00,
            510.00,
            1.9,
            0.8,
            Market::HongKong,
        ),
        stock(
            "AAPL",
            "苹果",
            208.78,
            -2.48,
            -1.17,
            60_000_000,
            2_000_000,
            10_000_000_000.0,
            1.1,
            212.00,
            207.50,
            2.1,
            0.4,
            Market::Us,
        ),
        stock(
            "589060",
            "科创综指ETF东财",
            0.979,
            0.003,
            0.31,
            50_000_000,
            1_500_000,
            50_000_000.0,
            1.3,
            0.985,
            0.975,
            1.0,
            1.2,
            Market::DomesticA,
        ),
        stock(
            "159380",
            "A500ETF东财",
            1.038,
            0.005,
            0.48,
            45_000_000,
            1_400_000,
            45_000_000.0,
            1.2,
            1.042,
            1.030,
            1.1,
            1.3,
            Market::DomesticA,
        ),
        stock(
            "159637",
            "新能源车龙头ETF",
            0.620,
            0.005,
            0.81,
            40_000_000,
            1_300_000,
            40_000_000.0,
            1.4,
            0.625,
            0.615,
            1.6,
            1.5,
            Market::DomesticA,
        ),
        stock(
            "159622",
            "创新药ETF沪港深",
            0.895,
            0.022,
            2.52,
            35_000_000,
            1_200_000,
            35_000_000.0,
            1.5,
            0.900,
            0.870,
            3.3,
            1.7,
            Market::DomesticA,
        ),
        stock(
            "159599",
            "芯片ETF基金",
            1.459,
            0.006,
            0.41,
            30_000_000,
            1_100_000,
            30_000_000.0,
            1.1,
            1.465,
            1.450,
            1.0,
            1.4,
            Market::DomesticA,
        ),
    ]
}

/// Deterministic subset for a category filter.
pub fn stocks_for(filter: CategoryFilter) -> Vec<StockRecord> {
    let all = all_stocks();
    match filter {
        CategoryFilter::All => all,
        CategoryFilter::Watchlist => {
            WATCHLIST_INDICES.iter().map(|&i| all[i].clone()).collect()
        }
        CategoryFilter::DomesticA => {
            all.into_iter().filter(|s| s.market == Market::DomesticA).collect()
        }
        CategoryFilter::HongKong => {
            all.into_iter().filter(|s| s.market == Market::HongKong).collect()
        }
        CategoryFilter::Us => all.into_iter().filter(|s| s.market == Market::Us).collect(),
    }
}
