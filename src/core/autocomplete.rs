//! Tab completion and ghost-text hints for command names.
//!
//! Only the first word is completed; arguments are free text for most
//! commands, so there is nothing meaningful to complete them against.

use crate::core::commands::Registry;

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single match - complete with this value (trailing space included).
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

/// Complete the command name being typed.
pub fn autocomplete(input: &str, registry: &Registry) -> AutocompleteResult {
    let partial = input.trim_start();
    if partial.is_empty() || partial.contains(char::is_whitespace) {
        return AutocompleteResult::None;
    }

    let mut matches: Vec<String> = registry
        .names()
        .filter(|name| name.starts_with(partial))
        .map(str::to_string)
        .collect();
    matches.sort();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Suffix to show as ghost text after the typed command name.
pub fn get_hint(input: &str, registry: &Registry) -> Option<String> {
    let partial = input.trim_start();
    if partial.is_empty() || partial.contains(char::is_whitespace) {
        return None;
    }

    registry
        .names()
        .filter(|name| name.starts_with(partial) && *name != partial)
        .min()
        .map(|name| name[partial.len()..].to_string())
}

/// Find the common prefix of multiple strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in &strings[1..] {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map(|((i, a), _)| i + a.len_utf8())
            .unwrap_or(0)
            .min(prefix_len);
    }

    first[..prefix_len].to_string()
}
