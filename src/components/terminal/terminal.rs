//! Terminal view component.
//!
//! The terminal interface with transcript and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::{AutocompleteResult, autocomplete, get_hint};
use crate::utils::dom::focus_terminal_input;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let transcript = Signal::derive(move || ctx.track(|s| s.transcript()));
    let input_value = Signal::derive(move || ctx.track(|s| s.input()));
    let busy = Signal::derive(move || ctx.track(|s| s.is_executing()));
    let prompt = Signal::derive(move || ctx.track(|s| s.prompt().to_string()));
    let input_enabled = ctx.session().options().enable_input;

    let on_input = Callback::new(move |text: String| ctx.session().set_input(text));
    let on_submit = Callback::new(move |line: String| {
        let status = ctx.session().submit(&line);
        log::debug!("submit '{}': {:?}", line, status);
    });
    let on_history_nav = Callback::new(move |direction: i32| ctx.session().navigate_history(direction));
    let on_autocomplete = Callback::new(move |text: String| -> AutocompleteResult {
        autocomplete(&text, ctx.session().registry())
    });
    let on_get_hint =
        Callback::new(move |text: String| get_hint(&text, ctx.session().registry()));

    let handle_click = move |_| focus_terminal_input();

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || transcript.get()
                    key=|entry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />
            </div>

            <Show when=move || input_enabled fallback=|| ()>
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        value=input_value
                        busy=busy
                        on_input=on_input
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_autocomplete=on_autocomplete
                        on_get_hint=on_get_hint
                    />
                </div>
            </Show>
        </div>
    }
}
