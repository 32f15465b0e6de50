//! Task Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod i18n;
mod models;
mod present;
mod query;
mod store;

use app::App;
use config::{AppConfig, MOUNT_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let mount = document()
        .get_element_by_id(MOUNT_ID)
        .expect("missing #app mount element");
    let config = AppConfig::from_element(&mount);

    tracing::info!(
        api_base = %config.api_base,
        locale = ?config.locale,
        "starting task board frontend"
    );

    leptos::mount::mount_to(mount.unchecked_into(), move || view! { <App config=config /> })
        .forget();
}
