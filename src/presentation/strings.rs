use crate::domain::watchlist::{CategoryFilter, Section, SortKey};
use crate::presentation::navigation::BottomNavItem;

/// User-visible strings, passed explicitly to whatever renders or formats
/// them. There is no process-global lookup; the shell installs one catalog
/// per session (via Leptos context) and tests construct their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringCatalog {
    pub logo_top: &'static str,
    pub logo_bottom: &'static str,
    pub name_code_header: &'static str,
    pub empty_placeholder: &'static str,
    pub error_unknown: &'static str,
    pub placeholder_fund: &'static str,
    pub placeholder_portfolio: &'static str,
    pub placeholder_generic: &'static str,
    /// Suffix for values >= 1e8 when formatting large numbers.
    pub hundred_million_suffix: &'static str,
    /// Suffix for values >= 1e4.
    pub ten_thousand_suffix: &'static str,
}

impl StringCatalog {
    pub fn section_label(&self, section: Section) -> &'static str {
        match section {
            Section::Watchlist => "自选股",
            Section::Fund => "基金",
            Section::Portfolio => "组合",
        }
    }

    pub fn filter_label(&self, filter: CategoryFilter) -> &'static str {
        match filter {
            CategoryFilter::All => "全部",
            CategoryFilter::Watchlist => "持仓",
            CategoryFilter::DomesticA => "沪深京",
            CategoryFilter::HongKong => "港股",
            CategoryFilter::Us => "美股",
        }
    }

    pub fn sort_label(&self, key: SortKey) -> &'static str {
        match key {
            SortKey::LatestPrice => "最新",
            SortKey::ChangePercent => "涨幅",
            SortKey::Change => "涨跌",
            SortKey::Momentum => "涨速",
            SortKey::Volume => "总量",
            SortKey::CurrentVolume => "现量",
            SortKey::Amount => "金额",
            SortKey::VolumeRatio => "量比",
            SortKey::High => "最高",
            SortKey::Low => "最低",
            SortKey::Amplitude => "振幅",
            SortKey::TurnoverRate => "换手",
        }
    }

    pub fn nav_label(&self, item: BottomNavItem) -> &'static str {
        match item {
            BottomNavItem::Home => "首页",
            BottomNavItem::Community => "社区",
            BottomNavItem::Stocks => "自选",
            BottomNavItem::Market => "行情",
            BottomNavItem::Wealth => "理财",
            BottomNavItem::Trade => "交易",
        }
    }
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self {
            logo_top: "东方",
            logo_bottom: "财富",
            name_code_header: "名称/代码",
            empty_placeholder: "--",
            error_unknown: "未知错误",
            placeholder_fund: "基金页面",
            placeholder_portfolio: "组合页面",
            placeholder_generic: "页面建设中",
            hundred_million_suffix: "亿",
            ten_thousand_suffix: "万",
        }
    }
}
