//! Fugo Creative Web Frontend
//!
//! Leptos-based WASM frontend: home, about, portfolio and team pages.

mod api;
mod app;
mod components;
mod config;
mod pages;

pub use app::App;
pub use config::WebConfig;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = WebConfig::from_build_env();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
