//! Data models shared between the engine and the view layer.
//!
//! - [`TranscriptEntry`], [`EntryKind`] - Terminal transcript lines

mod terminal;

pub use terminal::{EntryKind, TranscriptEntry};
