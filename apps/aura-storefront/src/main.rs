//! Aura Interiors storefront entry point.

mod app;
mod components;
mod data;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
