pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use shared::config::AppConfig;
use shared::http::ApiClient;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::debug!("API base URL: {}", config.base_url());

    let api = ApiClient::from_config(&config);
    leptos::mount::mount_to_body(move || view! { <app::App api=api /> });
    Ok(())
}
