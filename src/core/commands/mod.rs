//! Command registry and dispatch.
//!
//! This module provides:
//! - [`Command`] definitions (name, description, usage, handler)
//! - [`Registry`] for resolving a typed name to its command
//! - [`Output`], the value a handler produces
//!
//! # Architecture
//!
//! Built-in commands are a closed [`Builtin`] enum dispatched by `match`;
//! caller-supplied commands carry a boxed closure. Both sit behind the same
//! [`Handler`] so the registry resolves either with a single hash lookup.

mod builtin;
mod files;
mod info;
mod security;

pub use builtin::Builtin;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::core::error::{CommandError, ConfigError};

// =============================================================================
// Output
// =============================================================================

/// Value returned by a command handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// A single line
    Text(String),
    /// Several lines, displayed in order
    Lines(Vec<String>),
    /// Wipe the transcript instead of displaying anything
    Clear,
}

impl Output {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Split a multi-line text block into one line per entry.
    pub fn block(text: &str) -> Self {
        Self::lines(text.lines())
    }
}

/// Result type of every handler.
pub type CommandResult = Result<Output, CommandError>;

/// Ambient values a handler may read besides its arguments.
pub struct CommandContext<'a> {
    /// The registry the command was resolved from (for `help` and `usage`)
    pub registry: &'a Registry,
    /// Wall-clock time of the call, in Unix milliseconds
    pub now_millis: u64,
}

// =============================================================================
// Command
// =============================================================================

/// Closure behind a caller-supplied command.
pub type CustomHandler = Rc<dyn Fn(&[String]) -> CommandResult>;

/// How a command computes its output.
#[derive(Clone)]
pub enum Handler {
    Builtin(Builtin),
    Custom(CustomHandler),
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(b) => f.debug_tuple("Builtin").field(b).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An invocable command definition.
#[derive(Clone, Debug)]
pub struct Command {
    name: String,
    description: String,
    usage: String,
    handler: Handler,
}

impl Command {
    /// Define a caller-supplied command.
    pub fn custom(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        handler: impl Fn(&[String]) -> CommandResult + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
            handler: Handler::Custom(Rc::new(handler)),
        }
    }

    fn builtin(builtin: Builtin) -> Self {
        Self {
            name: builtin.name().to_string(),
            description: builtin.description().to_string(),
            usage: builtin.usage().to_string(),
            handler: Handler::Builtin(builtin),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Invoke the handler.
    pub fn run(&self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        match &self.handler {
            Handler::Builtin(builtin) => builtin.run(args, ctx),
            Handler::Custom(handler) => handler(args),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Ordered, name-indexed set of commands.
///
/// Built-in commands come first in [`Builtin::ALL`] order, followed by custom
/// commands. A custom command whose name is already registered replaces the
/// earlier definition in place, so the last registration wins while the
/// listing order of `help` stays stable.
#[derive(Clone, Debug)]
pub struct Registry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Registry containing only the built-in commands.
    pub fn with_defaults() -> Self {
        let commands: Vec<Command> = Builtin::ALL.iter().copied().map(Command::builtin).collect();
        let index = commands
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self { commands, index }
    }

    /// Built-in commands extended (and possibly overridden) by `custom`.
    pub fn new(custom: impl IntoIterator<Item = Command>) -> Result<Self, ConfigError> {
        let mut registry = Self::with_defaults();
        for command in custom {
            registry.register(command)?;
        }
        Ok(registry)
    }

    fn register(&mut self, command: Command) -> Result<(), ConfigError> {
        if command.name.is_empty() {
            return Err(ConfigError::EmptyCommandName);
        }
        if command.name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidCommandName(command.name));
        }

        match self.index.get(&command.name) {
            Some(&i) => {
                log::debug!("custom command '{}' overrides existing definition", command.name);
                self.commands[i] = command;
            }
            None => {
                self.index.insert(command.name.clone(), self.commands.len());
                self.commands.push(command);
            }
        }
        Ok(())
    }

    /// Resolve an exact, case-sensitive command name.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// All commands in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// All command names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    fn run(registry: &Registry, line: &[&str]) -> CommandResult {
        let ctx = CommandContext {
            registry,
            now_millis: 0,
        };
        registry
            .lookup(line[0])
            .expect("command registered")
            .run(&args(&line[1..]), &ctx)
    }

    #[test]
    fn test_defaults_registered_in_order() {
        let registry = Registry::with_defaults();
        let names: Vec<&str> = registry.names().collect();
        let expected: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(registry.len(), Builtin::ALL.len());
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let registry = Registry::with_defaults();
        assert!(registry.lookup("help").is_some());
        assert!(registry.lookup("HELP").is_none());
        assert!(registry.lookup("hel").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn test_custom_command_appended() {
        let registry = Registry::new([Command::custom(
            "hello",
            "Say hello",
            "hello [name]",
            |a| Ok(Output::text(format!("hello {}", a.join(" ")))),
        )])
        .unwrap();

        assert_eq!(registry.names().last(), Some("hello"));
        assert_eq!(
            run(&registry, &["hello", "bob"]).unwrap(),
            Output::text("hello bob")
        );
    }

    #[test]
    fn test_custom_overrides_default_in_place() {
        let registry = Registry::new([Command::custom("whoami", "Override", "whoami", |_| {
            Ok(Output::text("root"))
        })])
        .unwrap();

        assert_eq!(registry.len(), Builtin::ALL.len());
        let cmd = registry.lookup("whoami").unwrap();
        assert_eq!(cmd.description(), "Override");
        assert!(matches!(cmd.handler(), Handler::Custom(_)));
        assert_eq!(run(&registry, &["whoami"]).unwrap(), Output::text("root"));

        let position = registry.names().position(|n| n == "whoami");
        let default_position = Builtin::ALL.iter().position(|b| *b == Builtin::Whoami);
        assert_eq!(position, default_position);
    }

    #[test]
    fn test_last_custom_registration_wins() {
        let registry = Registry::new([
            Command::custom("x", "first", "x", |_| Ok(Output::text("1"))),
            Command::custom("x", "second", "x", |_| Ok(Output::text("2"))),
        ])
        .unwrap();
        assert_eq!(run(&registry, &["x"]).unwrap(), Output::text("2"));
        assert_eq!(registry.len(), Builtin::ALL.len() + 1);
    }

    #[test]
    fn test_invalid_custom_names_rejected() {
        let err = Registry::new([Command::custom("", "", "", |_| Ok(Output::Clear))]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyCommandName);

        let err =
            Registry::new([Command::custom("two words", "", "", |_| Ok(Output::Clear))]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCommandName(_)));
    }

    #[test]
    fn test_output_block_splits_lines() {
        assert_eq!(
            Output::block("a\nb\n"),
            Output::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }
}
