//! Status bar component.
//!
//! Displays the wall clock, session uptime and rotating activity text.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_VERSION};
use crate::utils::format::format_uptime;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let clock = Signal::derive(move || ctx.track(|s| s.status().clock));
    let uptime = Signal::derive(move || ctx.track(|s| format_uptime(s.status().uptime)));
    let activity = Signal::derive(move || ctx.track(|s| s.status().activity));
    let state = Signal::derive(move || {
        ctx.track(|s| {
            if s.is_executing() {
                "running"
            } else if s.is_autoplaying() {
                "demo"
            } else {
                "idle"
            }
        })
    });

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelText>{format!("{} v{}", APP_NAME, APP_VERSION)}</span>
                </span>
                <span class=css::labelCyan>
                    <span class=css::labelText>"Uptime:"</span>
                    <span class=css::value>{uptime}</span>
                </span>
                <span class=css::labelPurple>
                    <span class=css::labelText>"Status:"</span>
                    <span class=css::value>{state}</span>
                </span>
                <span class=css::activity>{activity}</span>
            </div>
            <span class=css::clock>{clock}" UTC"</span>
        </header>
    }
}
