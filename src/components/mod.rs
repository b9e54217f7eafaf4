//! UI components built with Leptos.
//!
//! - [`Shell`] - Page container (status bar + terminal)
//! - [`status`] - Status bar showing clock, uptime and activity
//! - [`terminal`] - Terminal emulator interface

pub mod status;
pub mod terminal;

pub use terminal::Shell;
