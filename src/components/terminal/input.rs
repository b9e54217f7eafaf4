//! Terminal input component with autocompletion and history navigation.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::CompletionState;
use crate::config::CLEAR_COMMAND;
use crate::core::AutocompleteResult;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field with autocomplete, history navigation, and ghost text hints.
///
/// The buffer itself lives in the session so scripted playback can type
/// into it; this component only forwards edits.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let completion = CompletionState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    // ArrowRight at the end of the line accepts the hint
    let cursor_at_end = move |current: &str| {
        input_ref.get().is_some_and(|input| {
            input.selection_start().ok().flatten().unwrap_or(0) as usize == current.len()
        })
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            let current = value.get_untracked();
            if let Some(completed) = completion.tab(&current, |typed| on_autocomplete.run(typed)) {
                on_input.run(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            completion.reset();
            on_submit.run(value.get_untracked());
        }
        "ArrowUp" => {
            ev.prevent_default();
            completion.reset();
            if on_history_nav.run(-1).is_some() {
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            completion.reset();
            on_history_nav.run(1);
        }
        "ArrowRight" => {
            let current = value.get_untracked();
            if cursor_at_end(&current)
                && let Some(completed) = completion.accept_hint(&current)
            {
                ev.prevent_default();
                on_input.run(completed);
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            completion.reset();
            on_input.run(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            completion.reset();
            on_submit.run(CLEAR_COMMAND.to_string());
        }
        "Escape" => completion.reset(),
        _ => completion.stop_cycling(),
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let typed = input.value();
        completion.stop_cycling();
        completion.hint.set(if typed.is_empty() {
            None
        } else {
            on_get_hint.run(typed.clone())
        });
        on_input.run(typed);
    };

    let suggestions_view = move || {
        let (matches, selected) = completion.suggestions()?;
        Some(view! {
            <div class=css::suggestions>
                {matches.into_iter().enumerate().map(|(i, name)| {
                    let class_name = if i == selected {
                        format!("{} {}", css::suggestion, css::suggestionActive)
                    } else {
                        css::suggestion.to_string()
                    };
                    view! { <span class=class_name>{name}</span> }
                }).collect_view()}
            </div>
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || value.get()}</span>
                        <span class=css::ghostHint>
                            {move || completion.hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        readonly=move || busy.get()
                        prop:value=value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}
