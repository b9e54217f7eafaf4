//! Core terminal engine.
//!
//! This module provides:
//! - [`Registry`] of built-in and custom [`Command`]s
//! - [`Session`], the transcript and submission state machine with autoplay
//! - [`Scheduler`] and [`Clock`] abstractions for deferred work
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
pub mod commands;
pub mod content;
pub mod error;
pub mod filesystem;
pub mod parser;
pub mod scheduler;
pub mod session;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandContext, CommandResult, Output, Registry};
pub use error::{CommandError, ConfigError};
pub use filesystem::VirtualFs;
pub use scheduler::{BrowserClock, BrowserScheduler, Clock, ManualScheduler, Scheduler, SystemClock};
pub use session::{Outcome, Phase, Session, SessionBuilder, SessionOptions, SessionStatus, SubmitStatus};
