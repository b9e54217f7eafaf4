//! Terminal session engine.
//!
//! A [`Session`] owns the transcript, the input buffer and the
//! `Idle`/`Executing` gate. Submitted lines are tokenized, resolved against
//! the [`Registry`] and their output is appended after a short display
//! delay. At most one submission is in flight at any time; a line submitted
//! while another is executing is dropped.
//!
//! All deferred work runs through the injected [`Scheduler`]. Every
//! deferred callback holds a weak handle and checks liveness first, so
//! nothing touches the session after [`Session::teardown`] or after the
//! last handle is dropped.

mod autoplay;
mod options;

pub use options::{CommandHook, Outcome, SessionOptions};

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::{
    APP_TAGLINE, ASCII_BANNER, CLEAR_COMMAND, DISPLAY_DELAY, MAX_COMMAND_HISTORY, PROMPT,
};
use crate::core::commands::{Command, CommandContext, Output, Registry};
use crate::core::error::ConfigError;
use crate::core::parser::parse_input;
use crate::core::scheduler::{Clock, Scheduler, TimerId};
use crate::models::TranscriptEntry;

use autoplay::AutoplayState;

// =============================================================================
// Public Types
// =============================================================================

/// Gate state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input
    Idle,
    /// A submission is waiting for its output to be displayed
    Executing,
}

/// What happened to a submitted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Resolved (or not) and waiting for the display delay
    Dispatched,
    /// Blank line; only the echo was appended
    Empty,
    /// The transcript was wiped
    Cleared,
    /// Dropped because another submission is executing
    Busy,
    /// Dropped because manual input is disabled
    InputDisabled,
    /// Dropped because the session was torn down
    TornDown,
}

/// Status bar values refreshed by [`Session::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    /// Wall clock at the last tick ("HH:MM:SS", UTC)
    pub clock: String,
    /// Time since the session was created
    pub uptime: Duration,
    /// Rotating cosmetic activity text
    pub activity: &'static str,
    ticks: usize,
}

type ChangeHook = Rc<dyn Fn()>;

// =============================================================================
// State
// =============================================================================

struct SessionState {
    transcript: Vec<TranscriptEntry>,
    input: String,
    phase: Phase,
    autoplay: Option<AutoplayState>,
    history: Vec<String>,
    history_index: Option<usize>,
    status: SessionStatus,
}

struct Inner {
    registry: Registry,
    options: SessionOptions,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn Clock>,
    on_command: Option<CommandHook>,
    on_change: RefCell<Option<ChangeHook>>,
    state: RefCell<SessionState>,
    timers: RefCell<HashSet<TimerId>>,
    alive: Cell<bool>,
    started_at: u64,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Session`].
pub struct SessionBuilder {
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn Clock>,
    options: SessionOptions,
    custom_commands: Vec<Command>,
    on_command: Option<CommandHook>,
}

impl SessionBuilder {
    pub fn options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a command on top of the built-in set (last registration wins).
    pub fn command(mut self, command: Command) -> Self {
        self.custom_commands.push(command);
        self
    }

    pub fn commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.custom_commands.extend(commands);
        self
    }

    /// Observe every dispatched command.
    pub fn on_command(mut self, hook: impl Fn(&str, &[String], Outcome) + 'static) -> Self {
        self.on_command = Some(Rc::new(hook));
        self
    }

    pub fn build(self) -> Result<Session, ConfigError> {
        let registry = Registry::new(self.custom_commands)?;
        let started_at = self.clock.now_millis();

        let transcript = if self.options.show_intro {
            banner()
        } else {
            Vec::new()
        };

        let state = SessionState {
            transcript,
            input: String::new(),
            phase: Phase::Idle,
            autoplay: None,
            history: Vec::new(),
            history_index: None,
            status: SessionStatus {
                clock: crate::utils::format::format_clock(started_at),
                uptime: Duration::ZERO,
                activity: crate::config::status::ACTIVITY[0],
                ticks: 0,
            },
        };

        Ok(Session {
            inner: Rc::new(Inner {
                registry,
                options: self.options,
                scheduler: self.scheduler,
                clock: self.clock,
                on_command: self.on_command,
                on_change: RefCell::new(None),
                state: RefCell::new(state),
                timers: RefCell::new(HashSet::new()),
                alive: Cell::new(true),
                started_at,
            }),
        })
    }
}

/// Welcome banner seeded into a fresh transcript.
fn banner() -> Vec<TranscriptEntry> {
    let mut lines: Vec<TranscriptEntry> = ASCII_BANNER.lines().map(TranscriptEntry::system).collect();
    lines.push(TranscriptEntry::system(""));
    lines.push(TranscriptEntry::system(APP_TAGLINE));
    lines.push(TranscriptEntry::system(""));
    lines.push(TranscriptEntry::system("Type 'help' for available commands."));
    lines
}

// =============================================================================
// Session
// =============================================================================

/// Handle to a terminal session. Cloning shares the same session.
#[derive(Clone)]
pub struct Session {
    inner: Rc<Inner>,
}

impl Session {
    /// Start building a session driven by `scheduler` and `clock`.
    pub fn builder(scheduler: Rc<dyn Scheduler>, clock: Rc<dyn Clock>) -> SessionBuilder {
        SessionBuilder {
            scheduler,
            clock,
            options: SessionOptions::default(),
            custom_commands: Vec::new(),
            on_command: None,
        }
    }

    // -- Rendering surface --

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.inner.state.borrow().transcript.clone()
    }

    /// Borrow the transcript without cloning it.
    pub fn with_transcript<R>(&self, f: impl FnOnce(&[TranscriptEntry]) -> R) -> R {
        f(&self.inner.state.borrow().transcript)
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    pub fn is_executing(&self) -> bool {
        self.phase() == Phase::Executing
    }

    pub fn input(&self) -> String {
        self.inner.state.borrow().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        if !self.is_alive() {
            return;
        }
        self.inner.state.borrow_mut().input = text.into();
        self.inner.notify();
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.state.borrow().status.clone()
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn options(&self) -> &SessionOptions {
        &self.inner.options
    }

    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.get()
    }

    /// Register the observer called after every state change.
    pub fn on_change(&self, hook: impl Fn() + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Rc::new(hook));
    }

    // -- Submission --

    /// Submit a line typed by the user.
    pub fn submit(&self, line: &str) -> SubmitStatus {
        if !self.is_alive() {
            return SubmitStatus::TornDown;
        }
        if !self.inner.options.enable_input {
            log::debug!("manual input disabled, dropping '{}'", line);
            return SubmitStatus::InputDisabled;
        }
        self.inner.submit_line(line)
    }

    /// Submit the current input buffer.
    pub fn submit_input(&self) -> SubmitStatus {
        let line = self.input();
        self.submit(&line)
    }

    // -- History --

    /// Walk command history: negative = older, positive = newer.
    ///
    /// The recalled line is also written to the input buffer. Moving past the
    /// newest entry returns `None` and clears the buffer.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        if !self.is_alive() {
            return None;
        }
        let recalled = {
            let mut state = self.inner.state.borrow_mut();
            let len = state.history.len();
            if len == 0 {
                return None;
            }

            let new_index = match state.history_index {
                None if direction < 0 => Some(len - 1),
                Some(i) if direction < 0 && i > 0 => Some(i - 1),
                Some(i) if direction > 0 && i < len - 1 => Some(i + 1),
                Some(_) if direction > 0 => None,
                current => current,
            };

            state.history_index = new_index;
            let recalled = new_index.map(|i| state.history[i].clone());
            state.input = recalled.clone().unwrap_or_default();
            recalled
        };
        self.inner.notify();
        recalled
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.state.borrow().history.clone()
    }

    // -- Lifecycle --

    /// Cancel every pending timer and stop accepting work.
    ///
    /// Safe to call more than once.
    pub fn teardown(&self) {
        if !self.inner.alive.replace(false) {
            return;
        }
        let timers: Vec<TimerId> = self.inner.timers.borrow_mut().drain().collect();
        log::debug!("session torn down, cancelling {} timer(s)", timers.len());
        for id in timers {
            self.inner.scheduler.cancel(id);
        }
        self.inner.state.borrow_mut().autoplay = None;
    }

    /// Number of deferred callbacks still owned by this session.
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().len()
    }
}

// =============================================================================
// Engine
// =============================================================================

impl Inner {
    fn notify(&self) {
        let hook = self.on_change.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Run `f` after `delay` unless the session has gone away by then.
    fn defer(self: &Rc<Self>, delay: Duration, f: impl FnOnce(&Rc<Inner>) + 'static) {
        if !self.alive.get() {
            return;
        }
        let weak: Weak<Inner> = Rc::downgrade(self);
        let slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        let task_slot = Rc::clone(&slot);

        let id = self.scheduler.schedule(
            delay,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if let Some(id) = task_slot.get() {
                    inner.timers.borrow_mut().remove(&id);
                }
                if inner.alive.get() {
                    f(&inner);
                }
            }),
        );
        slot.set(Some(id));
        self.timers.borrow_mut().insert(id);
        log::trace!("scheduled {:?} in {:?}", id, delay);
    }

    fn push_history(state: &mut SessionState, line: &str) {
        if state.history.last().map(String::as_str) != Some(line) {
            state.history.push(line.to_string());
            if state.history.len() > MAX_COMMAND_HISTORY {
                state.history.remove(0);
            }
        }
        state.history_index = None;
    }

    /// Submit a line through the single-flight gate.
    fn submit_line(self: &Rc<Self>, line: &str) -> SubmitStatus {
        let trimmed = line.trim();

        let parsed = {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Executing {
                log::warn!("submission '{}' dropped: another command is executing", trimmed);
                return SubmitStatus::Busy;
            }

            state.transcript.push(TranscriptEntry::command(trimmed));
            state.input.clear();

            match parse_input(trimmed) {
                None => None,
                Some(_) if trimmed == CLEAR_COMMAND => {
                    Self::push_history(&mut state, trimmed);
                    state.transcript.clear();
                    drop(state);
                    self.notify();
                    return SubmitStatus::Cleared;
                }
                Some(parsed) => {
                    Self::push_history(&mut state, trimmed);
                    Some(parsed)
                }
            }
        };

        let Some(parsed) = parsed else {
            self.notify();
            return SubmitStatus::Empty;
        };

        let (entries, outcome) = match self.registry.lookup(&parsed.name) {
            None => (
                vec![TranscriptEntry::error(format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    parsed.name
                ))],
                Outcome::NotFound,
            ),
            Some(command) => {
                log::debug!("dispatching '{}' with {} arg(s)", parsed.name, parsed.args.len());
                let ctx = CommandContext {
                    registry: &self.registry,
                    now_millis: self.clock.now_millis(),
                };
                match command.run(&parsed.args, &ctx) {
                    Ok(Output::Clear) => {
                        self.state.borrow_mut().transcript.clear();
                        self.fire_hook(&parsed.name, &parsed.args, Outcome::Success);
                        self.notify();
                        return SubmitStatus::Cleared;
                    }
                    Ok(Output::Text(text)) => (vec![TranscriptEntry::output(text)], Outcome::Success),
                    Ok(Output::Lines(lines)) => (
                        lines.into_iter().map(TranscriptEntry::output).collect(),
                        Outcome::Success,
                    ),
                    Err(err) => {
                        log::warn!("command '{}' failed: {}", parsed.name, err);
                        (
                            vec![TranscriptEntry::error(format!("Error: {}", err))],
                            Outcome::Error,
                        )
                    }
                }
            }
        };

        // Entered only once the handler has returned, so a handler that
        // unwinds leaves the gate open.
        self.state.borrow_mut().phase = Phase::Executing;
        self.fire_hook(&parsed.name, &parsed.args, outcome);
        self.notify();

        self.defer(DISPLAY_DELAY, move |inner| {
            {
                let mut state = inner.state.borrow_mut();
                state.transcript.extend(entries);
                state.phase = Phase::Idle;
            }
            inner.notify();
        });

        SubmitStatus::Dispatched
    }

    fn fire_hook(&self, name: &str, args: &[String], outcome: Outcome) {
        if let Some(hook) = &self.on_command {
            hook(name, args, outcome);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
