//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that exposes the
//! terminal [`Session`] to the component tree.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::Shell;
use crate::core::{BrowserClock, BrowserScheduler, ConfigError, Session, SessionOptions};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The session itself is not reactive; every change it makes bumps
/// `version`, and views that read session state track that signal.
///
/// # Note
///
/// This struct is `Copy` because both fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Session, LocalStorage>,
    /// Incremented after every session state change.
    pub version: RwSignal<u64>,
}

impl AppContext {
    /// Wrap `session` and wire its change observer to `version`.
    pub fn new(session: Session) -> Self {
        let version = RwSignal::new(0u64);
        session.on_change(move || {
            // The signal may already be disposed if a callback races unmount.
            let _ = version.try_update(|v| *v += 1);
        });
        Self {
            session: StoredValue::new_local(session),
            version,
        }
    }

    /// Handle to the session. Cloning is cheap.
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    /// Read session state reactively.
    pub fn track<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.version.track();
        self.session.with_value(f)
    }
}

fn build_session(options: SessionOptions) -> Result<Session, ConfigError> {
    Session::builder(Rc::new(BrowserScheduler::new()), Rc::new(BrowserClock))
        .options(options)
        .on_command(|name, args, outcome| {
            log::info!("command {} {:?} -> {:?}", name, args, outcome);
        })
        .build()
}

/// Root application component.
///
/// This component:
/// - Builds the session from `options` and provides the AppContext
/// - Starts autoplay and the status ticker
/// - Tears the session down when unmounted
#[component]
pub fn App(options: SessionOptions) -> impl IntoView {
    let session = match build_session(options) {
        Ok(session) => session,
        Err(e) => {
            log::error!("failed to start terminal: {}", e);
            return view! {
                <div style="padding: 2rem; color: #ff6b6b; font-family: 'Courier New', monospace;">
                    {format!("Terminal failed to start: {}", e)}
                </div>
            }
            .into_any();
        }
    };

    let ctx = AppContext::new(session.clone());
    provide_context(ctx);

    session.start_status_ticker();
    session.start();

    on_cleanup(move || ctx.session.with_value(Session::teardown));

    view! { <Shell /> }.into_any()
}
