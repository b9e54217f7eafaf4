//! Main shell component.
//!
//! Page container holding the status bar and the terminal.

use leptos::prelude::*;

use super::terminal::Terminal;
use crate::app::AppContext;
use crate::components::status::Status;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom whenever the session changes.
fn setup_autoscroll_effect(version: RwSignal<u64>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        version.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx.version, output_ref);

    view! {
        <div class=css::shell>
            <Status />
            <main class=css::main>
                <Terminal output_ref=output_ref />
            </main>
        </div>
    }
}
