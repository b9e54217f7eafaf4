//! Transcript data types shared by the session engine and the view layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Role of a transcript line, used by the view for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Banner and other session-generated text
    System,
    /// Echo of a submitted line
    Command,
    /// Normal handler output
    Output,
    /// Unknown command or handler fault
    Error,
}

/// A single line of the terminal transcript with a unique ID.
#[derive(Clone, Debug, Serialize)]
pub struct TranscriptEntry {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    pub content: String,
    pub kind: EntryKind,
}

// Global counter for generating unique IDs
static ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TranscriptEntry {
    fn new(kind: EntryKind, content: impl Into<String>) -> Self {
        Self {
            id: ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            content: content.into(),
            kind,
        }
    }

    pub fn system(s: impl Into<String>) -> Self {
        Self::new(EntryKind::System, s)
    }

    pub fn command(s: impl Into<String>) -> Self {
        Self::new(EntryKind::Command, s)
    }

    pub fn output(s: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, s)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, s)
    }
}

impl PartialEq for TranscriptEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.kind == other.kind && self.content == other.content
    }
}
