//! Browser entry point.

use caseboard::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(App);
}
