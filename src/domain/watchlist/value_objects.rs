use derive_more::{Deref, DerefMut, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - instrument identifier, unique within a market category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "StockCode({})", _0)]
pub struct StockCode(String);

impl StockCode {
    pub fn new(code: String) -> Result<Self, String> {
        if code.is_empty() {
            return Err("Stock code cannot be empty".to_string());
        }
        Ok(Self(code.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StockCode {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - market a record is listed on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Market {
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    DomesticA,

    #[strum(serialize = "HK")]
    #[serde(rename = "HK")]
    HongKong,

    #[strum(serialize = "US")]
    #[serde(rename = "US")]
    Us,
}

impl Market {
    /// Table badge next to the code; domestic listings carry none.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Market::DomesticA => None,
            Market::HongKong => Some("HK"),
            Market::Us => Some("US"),
        }
    }
}

/// Value Object - which subset of records a fetch returns
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum CategoryFilter {
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    All,

    #[strum(serialize = "watchlist")]
    #[serde(rename = "watchlist")]
    Watchlist,

    #[strum(serialize = "domestic")]
    #[serde(rename = "domestic")]
    DomesticA,

    #[strum(serialize = "hk")]
    #[serde(rename = "hk")]
    HongKong,

    #[strum(serialize = "us")]
    #[serde(rename = "us")]
    Us,
}

/// Value Object - the column the table is currently ordered by.
///
/// `Momentum` exists in the taxonomy but is not wired to any record field;
/// its column renders as a placeholder and sorting by it is the identity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum SortKey {
    #[strum(serialize = "latest-price")]
    #[serde(rename = "latest-price")]
    LatestPrice,

    #[strum(serialize = "change-percent")]
    #[serde(rename = "change-percent")]
    ChangePercent,

    #[strum(serialize = "change")]
    #[serde(rename = "change")]
    Change,

    #[strum(serialize = "momentum")]
    #[serde(rename = "momentum")]
    Momentum,

    #[strum(serialize = "volume")]
    #[serde(rename = "volume")]
    Volume,

    #[strum(serialize = "current-volume")]
    #[serde(rename = "current-volume")]
    CurrentVolume,

    #[strum(serialize = "amount")]
    #[serde(rename = "amount")]
    Amount,

    #[strum(serialize = "volume-ratio")]
    #[serde(rename = "volume-ratio")]
    VolumeRatio,

    #[strum(serialize = "high")]
    #[serde(rename = "high")]
    High,

    #[strum(serialize = "low")]
    #[serde(rename = "low")]
    Low,

    #[strum(serialize = "amplitude")]
    #[serde(rename = "amplitude")]
    Amplitude,

    #[strum(serialize = "turnover-rate")]
    #[serde(rename = "turnover-rate")]
    TurnoverRate,
}

impl SortKey {
    /// Whether the key maps to an actual record field.
    pub fn is_wired(&self) -> bool {
        !matches!(self, SortKey::Momentum)
    }
}

/// Value Object - top-level section of the watchlist screen
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Section {
    #[strum(serialize = "stocks")]
    #[serde(rename = "stocks")]
    Watchlist,

    #[strum(serialize = "fund")]
    #[serde(rename = "fund")]
    Fund,

    #[strum(serialize = "portfolio")]
    #[serde(rename = "portfolio")]
    Portfolio,
}
