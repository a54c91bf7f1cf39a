use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::watchlist::{CategoryFilter, FetchOutcome, Section, SortKey, StockRecord};
use crate::format_utils::{format_number_f64, format_number_i64, format_percent};
use crate::global_state::view_state_signal;
use crate::presentation::navigation::BottomNavItem;
use crate::presentation::strings::StringCatalog;
use crate::presentation::wasm_api::{dispatch_filter, dispatch_section, dispatch_sort};

const ACCENT: &str = "#FF5C00";
const GAIN: &str = "#E53935";
const LOSS: &str = "#00C800";

fn catalog() -> StringCatalog {
    use_context::<StringCatalog>().unwrap_or_default()
}

/// 🦀 Root component: content area + bottom navigation
#[component]
pub fn App() -> impl IntoView {
    provide_context(StringCatalog::default());

    let (current_nav, set_current_nav) = create_signal(BottomNavItem::Stocks);

    // Kick off the initial fetch, mirroring a fresh session default.
    dispatch_filter(CategoryFilter::All);

    view! {
        <style>
            {format!(r#"
            .stock-app {{
                font-family: 'PingFang SC', 'Helvetica Neue', -apple-system, sans-serif;
                background: #F5F5F5;
                min-height: 100vh;
                display: flex;
                flex-direction: column;
            }}
            .content {{
                flex: 1;
                display: flex;
                flex-direction: column;
                overflow: hidden;
            }}
            .top-tab-bar {{
                background: {ACCENT};
                color: white;
                display: flex;
                align-items: center;
                padding: 8px 16px;
                gap: 24px;
            }}
            .logo {{
                display: flex;
                flex-direction: column;
                align-items: center;
                font-weight: 700;
                font-size: 14px;
                margin-right: 20px;
            }}
            .top-tab {{
                background: none;
                border: none;
                color: white;
                font-weight: 700;
                font-size: 16px;
                padding: 8px 0;
                cursor: pointer;
            }}
            .top-tab.selected {{
                font-size: 20px;
            }}
            .sub-tab-bar {{
                background: white;
                display: flex;
                padding: 8px 0;
                border-bottom: 1px solid #EEEEEE;
                overflow-x: auto;
            }}
            .sub-tab {{
                background: none;
                border: none;
                color: black;
                font-size: 14px;
                padding: 0 16px;
                cursor: pointer;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 4px;
            }}
            .sub-tab.selected {{
                color: {ACCENT};
                font-weight: 700;
            }}
            .sub-tab-underline {{
                width: 20px;
                height: 3px;
                background: {ACCENT};
            }}
            .stock-table {{
                background: white;
                flex: 1;
                overflow: auto;
            }}
            .table-row {{
                display: flex;
                align-items: center;
                border-bottom: 0.5px solid #EEEEEE;
            }}
            .name-cell {{
                width: 130px;
                min-width: 130px;
                padding: 12px 0 12px 16px;
            }}
            .name-cell .stock-name {{
                font-size: 14px;
                font-weight: 500;
                color: black;
                white-space: nowrap;
                overflow: hidden;
                text-overflow: ellipsis;
            }}
            .name-cell .stock-code {{
                font-size: 11px;
                color: gray;
                display: flex;
                align-items: center;
                gap: 4px;
                margin-top: 2px;
            }}
            .market-badge {{
                background: #9E9E9E;
                color: white;
                font-size: 9px;
                border-radius: 2px;
                padding: 0 2px;
            }}
            .scroll-cells {{
                display: flex;
                overflow-x: auto;
                flex: 1;
            }}
            .data-cell {{
                width: 90px;
                min-width: 90px;
                height: 32px;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 14px;
            }}
            .header-cell {{
                background: none;
                border: none;
                color: #666666;
                font-size: 14px;
                cursor: pointer;
            }}
            .header-cell.active {{
                color: {ACCENT};
                font-weight: 700;
            }}
            .change-badge {{
                color: white;
                font-size: 12px;
                border-radius: 2px;
                padding: 2px 6px;
            }}
            .centered {{
                flex: 1;
                display: flex;
                align-items: center;
                justify-content: center;
            }}
            .spinner {{
                width: 36px;
                height: 36px;
                border: 4px solid #EEEEEE;
                border-top-color: {ACCENT};
                border-radius: 50%;
                animation: spin 0.8s linear infinite;
            }}
            @keyframes spin {{
                to {{ transform: rotate(360deg); }}
            }}
            .error-text {{
                color: red;
                font-size: 14px;
            }}
            .placeholder-text {{
                color: gray;
                font-size: 16px;
            }}
            .bottom-nav {{
                background: white;
                display: flex;
                justify-content: space-evenly;
                padding: 4px 0;
                border-top: 1px solid #EEEEEE;
            }}
            .nav-item {{
                background: none;
                border: none;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 4px;
                width: 48px;
                padding: 8px;
                font-size: 10px;
                color: gray;
                cursor: pointer;
            }}
            .nav-item.selected {{
                color: {ACCENT};
            }}
            "#)}
        </style>

        <div class="stock-app">
            <div class="content">
                {move || match current_nav.get() {
                    BottomNavItem::Stocks => view! { <StockScreen /> }.into_view(),
                    other => view! { <PlaceholderScreen item=other /> }.into_view(),
                }}
            </div>
            <BottomNavBar current=current_nav on_select=set_current_nav />
        </div>
    }
}

/// Bottom navigation bar with six destinations
#[component]
fn BottomNavBar(
    current: ReadSignal<BottomNavItem>,
    on_select: WriteSignal<BottomNavItem>,
) -> impl IntoView {
    let strings = catalog();

    view! {
        <nav class="bottom-nav">
            {BottomNavItem::iter()
                .map(|item| {
                    let label = strings.nav_label(item);
                    view! {
                        <button
                            class="nav-item"
                            class:selected=move || current.get() == item
                            on:click=move |_| on_select.set(item)
                        >
                            <span>{item.icon()}</span>
                            <span>{label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Watchlist screen: top section tabs plus the section body
#[component]
fn StockScreen() -> impl IntoView {
    let view_state = view_state_signal();

    view! {
        <TopTabBar />
        {move || match view_state.get().active_section {
            Section::Watchlist => view! { <WatchlistBody /> }.into_view(),
            Section::Fund => view! { <SectionPlaceholder section=Section::Fund /> }.into_view(),
            Section::Portfolio => {
                view! { <SectionPlaceholder section=Section::Portfolio /> }.into_view()
            }
        }}
    }
}

#[component]
fn TopTabBar() -> impl IntoView {
    let strings = catalog();
    let view_state = view_state_signal();

    view! {
        <div class="top-tab-bar">
            <div class="logo">
                <span>{strings.logo_top}</span>
                <span>{strings.logo_bottom}</span>
            </div>
            {Section::iter()
                .map(|section| {
                    let label = strings.section_label(section);
                    view! {
                        <button
                            class="top-tab"
                            class:selected=move || view_state.get().active_section == section
                            on:click=move |_| dispatch_section(section)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Category tabs + the fetch outcome (table, spinner or error)
#[component]
fn WatchlistBody() -> impl IntoView {
    let view_state = view_state_signal();

    view! {
        <SubTabBar />
        {move || match view_state.get().fetch_outcome {
            FetchOutcome::Loading => view! {
                <div class="centered">
                    <div class="spinner"></div>
                </div>
            }
            .into_view(),
            FetchOutcome::Success { records } => {
                let state = view_state.get();
                view! { <StockTable records=records active_sort=state.active_sort /> }
                    .into_view()
            }
            FetchOutcome::Error { message } => view! {
                <div class="centered">
                    <span class="error-text">{message}</span>
                </div>
            }
            .into_view(),
        }}
    }
}

#[component]
fn SubTabBar() -> impl IntoView {
    let strings = catalog();
    let view_state = view_state_signal();

    view! {
        <div class="sub-tab-bar">
            {CategoryFilter::iter()
                .map(|filter| {
                    let label = strings.filter_label(filter);
                    let is_selected = move || view_state.get().active_filter == filter;
                    view! {
                        <button
                            class="sub-tab"
                            class:selected=is_selected
                            on:click=move |_| dispatch_filter(filter)
                        >
                            <span>{label}</span>
                            {move || {
                                is_selected()
                                    .then(|| view! { <div class="sub-tab-underline"></div> })
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StockTable(records: Vec<StockRecord>, active_sort: SortKey) -> impl IntoView {
    let strings = catalog();

    view! {
        <div class="stock-table">
            <div class="table-row">
                <div class="name-cell" style="color: gray; font-size: 14px;">
                    {strings.name_code_header}
                </div>
                <div class="scroll-cells">
                    {SortKey::iter()
                        .map(|key| {
                            let label = strings.sort_label(key);
                            let active = key == active_sort;
                            view! {
                                <button
                                    class="data-cell header-cell"
                                    class:active=active
                                    on:click=move |_| dispatch_sort(key)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {records
                .into_iter()
                .map(|record| view! { <StockRow record=record /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StockRow(record: StockRecord) -> impl IntoView {
    let strings = catalog();
    let gain_color = if record.change_percent >= 0.0 { GAIN } else { LOSS };
    let change_color = if record.change >= 0.0 { GAIN } else { LOSS };

    view! {
        <div class="table-row">
            <div class="name-cell">
                <div class="stock-name">{record.name.clone()}</div>
                <div class="stock-code">
                    <span>{record.code.value().to_string()}</span>
                    {record
                        .market
                        .badge()
                        .map(|badge| view! { <span class="market-badge">{badge}</span> })}
                </div>
            </div>
            <div class="scroll-cells">
                <div class="data-cell" style=format!("color: {gain_color}")>
                    {record.price.to_string()}
                </div>
                <div class="data-cell">
                    <span
                        class="change-badge"
                        style=format!("background: {gain_color}")
                    >
                        {format_percent(record.change_percent)}
                    </span>
                </div>
                <div class="data-cell" style=format!("color: {change_color}")>
                    {record.change.to_string()}
                </div>
                <div class="data-cell" style="color: gray">
                    {strings.empty_placeholder}
                </div>
                <div class="data-cell">{format_number_i64(&strings, record.volume)}</div>
                <div class="data-cell">{format_number_i64(&strings, record.current_volume)}</div>
                <div class="data-cell">{format_number_f64(&strings, record.amount)}</div>
                <div class="data-cell">{record.volume_ratio.to_string()}</div>
                <div class="data-cell">{record.high.to_string()}</div>
                <div class="data-cell">{record.low.to_string()}</div>
                <div class="data-cell">{format!("{}%", record.amplitude)}</div>
                <div class="data-cell">{format!("{}%", record.turnover_rate)}</div>
            </div>
        </div>
    }
}

/// Fund / Portfolio static placeholder (no data behind these sections)
#[component]
fn SectionPlaceholder(section: Section) -> impl IntoView {
    let strings = catalog();
    let text = match section {
        Section::Fund => strings.placeholder_fund,
        Section::Portfolio => strings.placeholder_portfolio,
        Section::Watchlist => strings.placeholder_generic,
    };

    view! {
        <div class="centered">
            <span class="placeholder-text">{text}</span>
        </div>
    }
}

/// Placeholder body for the non-stock bottom navigation destinations
#[component]
fn PlaceholderScreen(item: BottomNavItem) -> impl IntoView {
    let strings = catalog();
    let label = strings.nav_label(item);

    view! {
        <div class="centered">
            <span class="placeholder-text">{format!("{label} · {}", strings.placeholder_generic)}</span>
        </div>
    }
}
