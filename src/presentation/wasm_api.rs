use std::rc::Rc;
use std::str::FromStr;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::application::coordinator::{
    global_coordinator, with_global_coordinator, with_global_coordinator_mut,
};
use crate::application::use_cases::LoadStocksUseCase;
use crate::domain::errors::IntentError;
use crate::domain::watchlist::{CategoryFilter, Section, SortKey};
use crate::global_state::sync_view_signals;
use crate::infrastructure::mock::MockStockService;

/// Dispatch helpers shared by the Leptos shell and the JS-facing API.
/// Each one mutates the coordinator, then refreshes the reactive mirror.

pub fn dispatch_filter(filter: CategoryFilter) {
    let use_case =
        LoadStocksUseCase::new(Rc::new(MockStockService::new()), global_coordinator());
    let pending = use_case.execute(filter);
    sync_view_signals();
    spawn_local(async move {
        if pending.await {
            sync_view_signals();
        }
    });
}

pub fn dispatch_sort(key: SortKey) {
    with_global_coordinator_mut(|coordinator| coordinator.select_sort(key));
    sync_view_signals();
}

pub fn dispatch_section(section: Section) {
    with_global_coordinator_mut(|coordinator| coordinator.select_section(section));
    sync_view_signals();
}

/// JavaScript-facing facade over the three UI intents plus a state
/// snapshot. Intent arguments arrive as the enums' string forms
/// (`"all"`, `"change-percent"`, `"fund"`, ...).
#[wasm_bindgen]
pub struct WatchlistApi;

#[wasm_bindgen]
impl WatchlistApi {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    #[wasm_bindgen(js_name = selectFilter)]
    pub fn select_filter(&self, filter: String) -> Result<(), JsValue> {
        let filter = CategoryFilter::from_str(&filter)
            .map_err(|_| intent_error(IntentError::UnknownFilter(filter)))?;
        dispatch_filter(filter);
        Ok(())
    }

    #[wasm_bindgen(js_name = selectSort)]
    pub fn select_sort(&self, key: String) -> Result<(), JsValue> {
        let key = SortKey::from_str(&key)
            .map_err(|_| intent_error(IntentError::UnknownSortKey(key)))?;
        dispatch_sort(key);
        Ok(())
    }

    #[wasm_bindgen(js_name = selectSection)]
    pub fn select_section(&self, section: String) -> Result<(), JsValue> {
        let section = Section::from_str(&section)
            .map_err(|_| intent_error(IntentError::UnknownSection(section)))?;
        dispatch_section(section);
        Ok(())
    }

    /// Current `{activeSection, activeFilter, activeSort, fetchOutcome}`
    /// as a JSON string.
    #[wasm_bindgen(js_name = stateSnapshot)]
    pub fn state_snapshot(&self) -> Result<String, JsValue> {
        let state = with_global_coordinator(|coordinator| coordinator.state().clone());
        serde_json::to_string(&state).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WatchlistApi {
    fn default() -> Self {
        Self::new()
    }
}

fn intent_error(error: IntentError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
