pub mod app;
pub mod game_data;
pub mod layout;
pub mod panels;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Client-side entry: set up console logging, then mount `App` on `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("starting MWI Companion {}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
