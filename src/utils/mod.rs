//! Utility modules for formatting, DOM access and logging.
//!
//! Provides:
//! - [`format`] - Date, uptime and size formatting
//! - [`dom`] - Browser helpers and option loading
//! - [`logger`] - `log` backend for the browser console

pub mod dom;
pub mod format;
pub mod logger;
