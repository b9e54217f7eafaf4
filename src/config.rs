//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use std::time::Duration;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner displayed at the top of a fresh session.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Biography for the `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Contact card for the `contact` command.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

/// Resume for the `resume` command.
pub const RESUME_TEXT: &str = include_str!("../assets/text/resume.txt");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the prompt and banner.
pub const APP_NAME: &str = "folio";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User tagline displayed under the banner.
pub const APP_TAGLINE: &str = "Security Engineer | Full-Stack Developer | ML for Defense";

/// Login name reported by `whoami`.
pub const USERNAME: &str = "visitor";

/// Virtual home directory reported by `pwd`.
pub const HOME_DIR: &str = "/home/visitor";

/// Prompt prefix shown before echoed commands.
pub const PROMPT: &str = "visitor@folio:~";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Name of the command that wipes the transcript.
pub const CLEAR_COMMAND: &str = "clear";

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Delay between accepting a command and displaying its result.
pub const DISPLAY_DELAY: Duration = Duration::from_millis(300);

// =============================================================================
// Autoplay Configuration
// =============================================================================

/// Autoplay timing constants.
pub mod autoplay {
    use std::time::Duration;

    /// Delay before the first scripted command is typed.
    pub const START_DELAY: Duration = Duration::from_millis(1000);

    /// Pause between typing a command into the input and submitting it.
    pub const TYPING_BEAT: Duration = Duration::from_millis(500);

    /// Default delay between scripted commands, in milliseconds.
    pub const DEFAULT_DELAY_MS: u64 = 2000;

    /// Commands run on a fresh session when nothing else is configured.
    pub const DEFAULT_COMMANDS: &[&str] = &["whoami", "about", "skills"];
}

// =============================================================================
// Status Bar Configuration
// =============================================================================

/// Status ticker constants.
pub mod status {
    use std::time::Duration;

    /// Interval between status bar refreshes.
    pub const TICK: Duration = Duration::from_secs(1);

    /// Activity messages rotated through on every tick.
    pub const ACTIVITY: &[&str] = &[
        "monitoring network",
        "scanning ports",
        "analyzing traffic",
        "updating signatures",
        "idle",
    ];
}

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second for time formatting.
pub const MS_PER_SECOND: u64 = 1000;
