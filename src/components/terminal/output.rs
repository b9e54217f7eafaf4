use leptos::prelude::*;

use crate::config::PROMPT;
use crate::models::{EntryKind, TranscriptEntry};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// One transcript entry.
#[component]
pub fn Output(entry: TranscriptEntry) -> impl IntoView {
    if entry.content.is_empty() {
        return view! { <div class=css::lineEmpty></div> }.into_any();
    }
    match entry.kind {
        EntryKind::Command => view! {
            <div class=css::command>
                <span class=format!("{} glow", css::textGreen)>{PROMPT}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{entry.content}</span>
            </div>
        }
        .into_any(),
        EntryKind::System => view! {
            <pre class=format!("{} glow", css::ascii)>{entry.content}</pre>
        }
        .into_any(),
        EntryKind::Output => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{entry.content}</div>
        }
        .into_any(),
        EntryKind::Error => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{entry.content}</div>
        }
        .into_any(),
    }
}
