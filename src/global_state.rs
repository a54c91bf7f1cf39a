use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::coordinator::with_global_coordinator;
use crate::domain::watchlist::WatchlistViewState;

/// Reactive bridge between the coordinator and the Leptos shell. The
/// coordinator owns the state; these signals only mirror it for rendering.
pub struct Globals {
    pub view_state: RwSignal<WatchlistViewState>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { view_state: create_rw_signal(WatchlistViewState::new()) })
}

/// Helper macro to define functions returning global signals.
/// Usage: `global_signals! { pub fn_name => field: Type, }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}

global_signals! {
    pub view_state_signal => view_state: WatchlistViewState,
}

/// Copy the coordinator's current state into the reactive mirror.
pub fn sync_view_signals() {
    let snapshot = with_global_coordinator(|coordinator| coordinator.state().clone());
    globals().view_state.set(snapshot);
}
