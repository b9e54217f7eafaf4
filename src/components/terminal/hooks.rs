//! Completion state for the input line.
//!
//! [`Cycle`] is the plain stepping logic for an ambiguous Tab completion;
//! [`CompletionState`] wraps it and the ghost hint in signals for the view.

use leptos::prelude::*;

use crate::core::AutocompleteResult;

/// Position within the candidates of an ambiguous completion.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    common: String,
    matches: Vec<String>,
    index: usize,
}

impl Cycle {
    /// Only [`AutocompleteResult::Multiple`] has anything to cycle through.
    pub fn from_result(result: AutocompleteResult) -> Option<Self> {
        match result {
            AutocompleteResult::Multiple(common, matches) if !matches.is_empty() => Some(Self {
                common,
                matches,
                index: 0,
            }),
            _ => None,
        }
    }

    /// What the first Tab press inserts: the shared prefix when it extends
    /// the typed text, otherwise the first candidate.
    pub fn first(&self, typed: &str) -> &str {
        if self.common.len() > typed.trim_start().len() {
            &self.common
        } else {
            self.current()
        }
    }

    pub fn current(&self) -> &str {
        &self.matches[self.index]
    }

    /// Step to the next candidate, wrapping at the end.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.matches.len();
        self.current()
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Reactive Tab-cycle and ghost-hint state for one input line.
#[derive(Clone, Copy)]
pub struct CompletionState {
    cycle: RwSignal<Option<Cycle>>,
    /// Suffix shown after the typed text
    pub hint: RwSignal<Option<String>>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self {
            cycle: RwSignal::new(None),
            hint: RwSignal::new(None),
        }
    }

    /// Handle a Tab press, returning the new input value if it changes.
    pub fn tab(
        &self,
        typed: &str,
        complete: impl FnOnce(String) -> AutocompleteResult,
    ) -> Option<String> {
        if typed.is_empty() {
            return None;
        }

        let mut stepped = None;
        self.cycle.update(|cycle| {
            if let Some(cycle) = cycle {
                stepped = Some(cycle.advance().to_string());
            }
        });
        if stepped.is_some() {
            return stepped;
        }

        self.hint.set(None);
        match complete(typed.to_string()) {
            AutocompleteResult::Single(completed) => Some(completed),
            AutocompleteResult::None => None,
            ambiguous => {
                let cycle = Cycle::from_result(ambiguous)?;
                let first = cycle.first(typed).to_string();
                self.cycle.set(Some(cycle));
                Some(first)
            }
        }
    }

    /// Append the hint to `typed` and consume it.
    pub fn accept_hint(&self, typed: &str) -> Option<String> {
        let hint = self.hint.get_untracked()?;
        self.hint.set(None);
        Some(format!("{}{}", typed, hint))
    }

    /// Candidates and the selected index while cycling.
    pub fn suggestions(&self) -> Option<(Vec<String>, usize)> {
        self.cycle
            .with(|cycle| cycle.as_ref().map(|c| (c.matches().to_vec(), c.index())))
    }

    pub fn stop_cycling(&self) {
        self.cycle.set(None);
    }

    pub fn reset(&self) {
        self.cycle.set(None);
        self.hint.set(None);
    }
}

impl Default for CompletionState {
    fn default() -> Self {
        Self::new()
    }
}
