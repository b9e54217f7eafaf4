//! Scripted autoplay and the status ticker.
//!
//! Autoplay types each scripted command into the input buffer, pauses for a
//! beat, submits it through the same gate as manual input and then waits
//! the per-command delay. If the gate is busy when a step comes up (for
//! example because a visitor submitted something by hand) the step is
//! retried after another beat instead of being dropped.

use std::rc::Rc;
use std::time::Duration;

use super::{Inner, Phase, Session, SubmitStatus};
use crate::config::{autoplay, status};
use crate::utils::format::format_clock;

pub(super) struct AutoplayState {
    commands: Rc<[String]>,
    cursor: usize,
    delay: Duration,
}

impl Session {
    /// Run the configured initial commands, if any.
    ///
    /// Returns `false` when there is nothing to play or autoplay is already
    /// running.
    pub fn start(&self) -> bool {
        let commands = self.inner.options.initial_commands.clone();
        let delay = self.inner.options.auto_type_delay();
        self.autoplay(commands, delay)
    }

    /// Play `commands` in order with `per_command_delay` between them.
    pub fn autoplay(&self, commands: Vec<String>, per_command_delay: Duration) -> bool {
        if !self.is_alive() || commands.is_empty() {
            return false;
        }
        {
            let mut state = self.inner.state.borrow_mut();
            if state.autoplay.is_some() {
                log::warn!("autoplay already running");
                return false;
            }
            state.autoplay = Some(AutoplayState {
                commands: commands.into(),
                cursor: 0,
                delay: per_command_delay,
            });
        }
        log::debug!("autoplay scheduled");
        self.inner.defer(autoplay::START_DELAY, Inner::autoplay_step);
        self.inner.notify();
        true
    }

    pub fn is_autoplaying(&self) -> bool {
        self.inner.state.borrow().autoplay.is_some()
    }

    /// Index of the next scripted command, while autoplay runs.
    pub fn autoplay_cursor(&self) -> Option<usize> {
        self.inner.state.borrow().autoplay.as_ref().map(|a| a.cursor)
    }

    // -- Status ticker --

    /// Refresh the status bar from the injected clock.
    pub fn tick(&self) {
        if !self.is_alive() {
            return;
        }
        self.inner.tick();
    }

    /// Call [`tick`](Self::tick) every [`status::TICK`] until teardown.
    pub fn start_status_ticker(&self) {
        self.inner.defer(status::TICK, Inner::ticker_step);
    }
}

impl Inner {
    fn tick(&self) {
        let now = self.clock.now_millis();
        {
            let mut state = self.state.borrow_mut();
            let status_bar = &mut state.status;
            status_bar.ticks += 1;
            status_bar.clock = format_clock(now);
            status_bar.uptime = Duration::from_millis(now.saturating_sub(self.started_at));
            status_bar.activity = status::ACTIVITY[status_bar.ticks % status::ACTIVITY.len()];
        }
        self.notify();
    }

    fn ticker_step(self: &Rc<Self>) {
        self.tick();
        self.defer(status::TICK, Inner::ticker_step);
    }

    fn autoplay_step(self: &Rc<Self>) {
        let next = {
            let state = self.state.borrow();
            let Some(play) = &state.autoplay else {
                return;
            };
            play.commands.get(play.cursor).cloned()
        };

        let Some(command) = next else {
            log::debug!("autoplay finished");
            self.state.borrow_mut().autoplay = None;
            self.notify();
            return;
        };

        if self.state.borrow().phase == Phase::Executing {
            self.defer(autoplay::TYPING_BEAT, Inner::autoplay_step);
            return;
        }

        self.state.borrow_mut().input = command.clone();
        self.notify();

        self.defer(autoplay::TYPING_BEAT, move |inner| {
            if inner.state.borrow().phase == Phase::Executing {
                // Someone else got through the gate while we were typing.
                inner.defer(autoplay::TYPING_BEAT, Inner::autoplay_step);
                return;
            }

            let status = inner.submit_line(&command);
            debug_assert_ne!(status, SubmitStatus::Busy);

            let delay = {
                let mut state = inner.state.borrow_mut();
                match state.autoplay.as_mut() {
                    Some(play) => {
                        play.cursor += 1;
                        play.delay
                    }
                    None => return,
                }
            };
            inner.defer(delay, Inner::autoplay_step);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISPLAY_DELAY;
    use crate::core::scheduler::ManualScheduler;
    use crate::core::session::SessionOptions;
    use crate::models::{EntryKind, TranscriptEntry};

    fn session(sched: &ManualScheduler, commands: &[&str]) -> Session {
        Session::builder(Rc::new(sched.clone()), Rc::new(sched.clone()))
            .options(SessionOptions {
                initial_commands: commands.iter().map(|s| s.to_string()).collect(),
                auto_type_delay_ms: 1000,
                show_intro: false,
                enable_input: true,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_autoplay_types_then_submits() {
        let sched = ManualScheduler::new(0);
        let session = session(&sched, &["whoami"]);
        assert!(session.start());
        assert!(session.is_autoplaying());
        assert_eq!(session.autoplay_cursor(), Some(0));
        assert!(!session.start());

        sched.advance(autoplay::START_DELAY);
        assert_eq!(session.input(), "whoami");
        assert!(session.transcript().is_empty());

        sched.advance(autoplay::TYPING_BEAT);
        assert_eq!(session.input(), "");
        assert_eq!(session.transcript(), vec![TranscriptEntry::command("whoami")]);
        assert_eq!(session.autoplay_cursor(), Some(1));

        sched.run_until_idle(100);
        assert!(!session.is_autoplaying());
        assert_eq!(session.autoplay_cursor(), None);
        assert_eq!(
            session.transcript(),
            vec![
                TranscriptEntry::command("whoami"),
                TranscriptEntry::output("visitor"),
            ]
        );
    }

    #[test]
    fn test_autoplay_runs_with_manual_input_disabled() {
        let sched = ManualScheduler::new(0);
        let session = Session::builder(Rc::new(sched.clone()), Rc::new(sched.clone()))
            .options(SessionOptions {
                initial_commands: vec!["whoami".to_string()],
                auto_type_delay_ms: 1000,
                show_intro: false,
                enable_input: false,
            })
            .build()
            .unwrap();

        assert_eq!(session.submit("pwd"), SubmitStatus::InputDisabled);
        assert!(session.start());
        sched.run_until_idle(100);

        assert_eq!(
            session.transcript(),
            vec![
                TranscriptEntry::command("whoami"),
                TranscriptEntry::output("visitor"),
            ]
        );
        assert_eq!(session.submit("pwd"), SubmitStatus::InputDisabled);
    }

    #[test]
    fn test_autoplay_empty_list() {
        let sched = ManualScheduler::new(0);
        let session = session(&sched, &[]);
        assert!(!session.start());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_autoplay_waits_for_busy_gate() {
        let sched = ManualScheduler::new(0);
        let session = session(&sched, &["pwd"]);
        session.start();

        // A manual command lands just before the scripted one would be typed.
        sched.advance(autoplay::START_DELAY - Duration::from_millis(100));
        session.submit("whoami");
        sched.run_until_idle(100);

        let transcript = session.transcript();
        assert_eq!(
            transcript,
            vec![
                TranscriptEntry::command("whoami"),
                TranscriptEntry::output("visitor"),
                TranscriptEntry::command("pwd"),
                TranscriptEntry::output("/home/visitor"),
            ]
        );
    }

    #[test]
    fn test_manual_submit_during_typing_beat_is_not_interleaved() {
        let sched = ManualScheduler::new(0);
        let session = session(&sched, &["pwd"]);
        session.start();

        sched.advance(autoplay::START_DELAY);
        assert_eq!(session.input(), "pwd");
        session.submit("whoami");
        sched.advance(DISPLAY_DELAY / 2);
        assert!(session.is_executing());
        sched.run_until_idle(100);

        let kinds: Vec<EntryKind> = session.transcript().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Command,
                EntryKind::Output,
                EntryKind::Command,
                EntryKind::Output,
            ]
        );
        assert_eq!(session.transcript()[2], TranscriptEntry::command("pwd"));
    }

    #[test]
    fn test_teardown_stops_autoplay() {
        let sched = ManualScheduler::new(0);
        let session = session(&sched, &["whoami", "pwd"]);
        session.start();
        sched.advance(autoplay::START_DELAY + autoplay::TYPING_BEAT);
        session.teardown();
        sched.run_until_idle(100);

        assert!(!session.is_autoplaying());
        assert_eq!(session.transcript(), vec![TranscriptEntry::command("whoami")]);
    }

    #[test]
    fn test_status_ticker() {
        let sched = ManualScheduler::new(3_600_000);
        let session = session(&sched, &[]);
        assert_eq!(session.status().clock, "01:00:00");
        assert_eq!(session.status().activity, status::ACTIVITY[0]);

        session.start_status_ticker();
        sched.advance(Duration::from_secs(3));
        let bar = session.status();
        assert_eq!(bar.uptime, Duration::from_secs(3));
        assert_eq!(bar.clock, "01:00:03");
        assert_eq!(bar.activity, status::ACTIVITY[3]);

        session.teardown();
        sched.advance(Duration::from_secs(3));
        assert_eq!(session.status().uptime, Duration::from_secs(3));
        assert_eq!(sched.pending(), 0);
    }
}
