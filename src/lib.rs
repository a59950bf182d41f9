//! Interactive layer of the AI music service landing page.
//!
//! ARCHITECTURE
//! ============
//! `state` and `util` hold browser-free logic (validation, the submit
//! lifecycle, drag geometry, reveal and animation sequencing) and are tested
//! natively. `components` bind that logic to the DOM, and `net` talks to the
//! lead and stats endpoints. Everything touching `web-sys` sits behind the
//! `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

#[cfg(feature = "csr")]
mod start {
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("landing page mounting");
        leptos::mount::mount_to_body(App);
    }
}
