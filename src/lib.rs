use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Initialize logging and panic reporting for the session
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(domain::logging::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Stock watch application initialized",
    );
}

/// Mount the Leptos shell into the document body
#[wasm_bindgen]
pub fn mount_app() {
    use app::App;
    leptos::mount_to_body(|| leptos::view! { <App /> });
}
