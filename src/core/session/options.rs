//! Session construction parameters.

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::autoplay;
use crate::core::error::ConfigError;

/// Options recognised when a session is created.
///
/// Deserializable so a host page can supply them as JSON; every field is
/// optional and falls back to [`SessionOptions::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Commands auto-run on start to script a demo
    pub initial_commands: Vec<String>,
    /// Delay between auto-run commands, in milliseconds
    pub auto_type_delay_ms: u64,
    /// Seed the transcript with the welcome banner
    pub show_intro: bool,
    /// Accept manual submissions
    pub enable_input: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            initial_commands: autoplay::DEFAULT_COMMANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            auto_type_delay_ms: autoplay::DEFAULT_DELAY_MS,
            show_intro: true,
            enable_input: true,
        }
    }
}

impl SessionOptions {
    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn auto_type_delay(&self) -> Duration {
        Duration::from_millis(self.auto_type_delay_ms)
    }
}

/// How a dispatched command ended, as reported to the command hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Success,
    Error,
    NotFound,
}

/// Observer called once per dispatched command with `(name, args, outcome)`.
pub type CommandHook = Rc<dyn Fn(&str, &[String], Outcome)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SessionOptions::default();
        assert!(options.show_intro);
        assert!(options.enable_input);
        assert_eq!(options.auto_type_delay(), Duration::from_millis(2000));
        assert_eq!(options.initial_commands, vec!["whoami", "about", "skills"]);
    }

    #[test]
    fn test_from_json_partial() {
        let options =
            SessionOptions::from_json(r#"{"initialCommands": ["ls"], "showIntro": false}"#).unwrap();
        assert_eq!(options.initial_commands, vec!["ls"]);
        assert!(!options.show_intro);
        assert!(options.enable_input);
        assert_eq!(options.auto_type_delay_ms, 2000);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SessionOptions::from_json(r#"{"showIntro": "yes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Options(_)));
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&Outcome::NotFound).unwrap(),
            "\"not-found\""
        );
    }
}
