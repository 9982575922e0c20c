//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it installs the panic hook and console
//! logger, then mounts [`App`] to the document body.

use leptos::prelude::*;
use plantknight_ui::App;

fn main() {
    console_error_panic_hook::set_once();

    // tracing's `log` feature forwards events here when no subscriber is set
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting PlantKnight");

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
