use folioterm::app::App;
use folioterm::utils::{dom, logger};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();
    let options = dom::session_options(&root);

    mount_to(root, move || view! { <App options=options /> }).forget();
}
