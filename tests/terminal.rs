//! End-to-end scenarios driven through the public session API on virtual time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folioterm::core::{
    Command, CommandError, ManualScheduler, Outcome, Output, Session, SessionOptions, SubmitStatus,
};
use folioterm::models::{EntryKind, TranscriptEntry};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn options(initial_commands: &[&str], show_intro: bool) -> SessionOptions {
    SessionOptions {
        initial_commands: initial_commands.iter().map(|s| s.to_string()).collect(),
        auto_type_delay_ms: 1500,
        show_intro,
        enable_input: true,
    }
}

fn session_with(sched: &ManualScheduler, options: SessionOptions) -> Session {
    init_logging();
    Session::builder(Rc::new(sched.clone()), Rc::new(sched.clone()))
        .options(options)
        .build()
        .unwrap()
}

fn quiet_session(sched: &ManualScheduler) -> Session {
    session_with(sched, options(&[], false))
}

/// Submit `line`, let the display delay elapse and return the new entries.
fn run(session: &Session, sched: &ManualScheduler, line: &str) -> Vec<TranscriptEntry> {
    let before = session.transcript().len();
    session.submit(line);
    sched.run_until_idle(10);
    session
        .transcript()
        .get(before..)
        .map(<[_]>::to_vec)
        .unwrap_or_default()
}

fn contents(entries: &[TranscriptEntry]) -> Vec<String> {
    entries.iter().map(|e| e.content.clone()).collect()
}

#[test]
fn repeated_submissions_are_identical() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    for line in ["help", "ls /home/visitor", "nmap 10.0.0.1", "analyze xss", "skills"] {
        let first = contents(&run(&session, &sched, line));
        let second = contents(&run(&session, &sched, line));
        assert_eq!(first, second, "output of '{}' changed between runs", line);
    }
}

#[test]
fn second_submission_while_executing_is_dropped() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    assert_eq!(session.submit("whoami"), SubmitStatus::Dispatched);
    assert!(session.is_executing());
    assert_eq!(session.submit("pwd"), SubmitStatus::Busy);
    sched.run_until_idle(10);

    assert_eq!(
        session.transcript(),
        vec![
            TranscriptEntry::command("whoami"),
            TranscriptEntry::output("visitor"),
        ]
    );
    assert!(!session.is_executing());
}

#[test]
fn every_help_entry_resolves_through_usage() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    let help = contents(&run(&session, &sched, "help"));
    let names: Vec<String> = help
        .iter()
        .filter(|line| line.starts_with("  "))
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect();
    assert_eq!(names.len(), session.registry().len());

    for name in names {
        let out = run(&session, &sched, &format!("usage {}", name));
        assert!(
            out.iter().all(|e| !e.content.contains("not found")),
            "usage {} reported not found",
            name
        );
        assert!(out.iter().any(|e| e.content.contains(name.as_str())));
    }
}

#[test]
fn clear_empties_any_transcript() {
    let sched = ManualScheduler::new(0);
    let session = session_with(&sched, options(&[], true));
    assert!(!session.transcript().is_empty());

    run(&session, &sched, "resume");
    run(&session, &sched, "zzznosuch");
    assert_eq!(session.submit("clear"), SubmitStatus::Cleared);
    assert_eq!(session.with_transcript(|entries| entries.len()), 0);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn echo_without_arguments_prints_empty_line() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    assert_eq!(
        run(&session, &sched, "echo"),
        vec![TranscriptEntry::command("echo"), TranscriptEntry::output("")]
    );
    assert_eq!(run(&session, &sched, "echo"), run(&session, &sched, "echo   "));
}

#[test]
fn clear_then_more_commands_after_long_transcript() {
    let sched = ManualScheduler::new(0);
    let session = session_with(&sched, options(&[], true));
    run(&session, &sched, "skills");

    assert!(run(&session, &sched, "clear").is_empty());
    assert_eq!(
        run(&session, &sched, "whoami"),
        vec![TranscriptEntry::command("whoami"), TranscriptEntry::output("visitor")]
    );
}

#[test]
fn unknown_command_is_reported_once() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    let out = run(&session, &sched, "zzznosuch");
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], TranscriptEntry::command("zzznosuch"));
    assert_eq!(out[1].kind, EntryKind::Error);
    assert!(out[1].content.contains("zzznosuch"));
    assert!(out[1].content.contains("help"));
}

#[test]
fn projects_with_unknown_tag() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    let out = run(&session, &sched, "projects nonexistenttag");
    assert_eq!(
        out[1..],
        [TranscriptEntry::output("No projects found with tag 'nonexistenttag'")]
    );
}

#[test]
fn skills_category_lists_only_that_category() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    let out = contents(&run(&session, &sched, "skills security"));
    assert_eq!(out[1], "Security:");
    let entries = &out[2..];
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|line| line.starts_with("  - ")));
    for other in ["Development", "AI / ML", "Rust", "PyTorch"] {
        assert!(!out.iter().any(|line| line.contains(other)));
    }
}

#[test]
fn crypto_round_trip_through_the_session() {
    let sched = ManualScheduler::new(0);
    let session = quiet_session(&sched);

    let encrypted = contents(&run(&session, &sched, "crypto encrypt hello"));
    let value = encrypted
        .iter()
        .find_map(|line| line.strip_prefix("Encrypted:"))
        .map(str::trim)
        .unwrap()
        .to_string();

    let decrypted = contents(&run(&session, &sched, &format!("crypto decrypt {}", value)));
    let plain = decrypted
        .iter()
        .find_map(|line| line.strip_prefix("Decrypted:"))
        .map(str::trim)
        .unwrap();
    assert_eq!(plain, "hello");
}

#[test]
fn autoplay_preserves_order_after_banner() {
    let sched = ManualScheduler::new(0);
    let session = session_with(&sched, options(&["whoami", "ls"], true));
    let banner = session.transcript();
    assert!(!banner.is_empty());
    assert!(banner.iter().all(|e| e.kind == EntryKind::System));

    assert!(session.start());
    sched.run_until_idle(100);
    assert!(!session.is_autoplaying());

    let transcript = session.transcript();
    let (head, tail) = transcript.split_at(banner.len());
    assert_eq!(head, banner.as_slice());
    assert_eq!(
        tail,
        [
            TranscriptEntry::command("whoami"),
            TranscriptEntry::output("visitor"),
            TranscriptEntry::command("ls"),
            TranscriptEntry::output("etc/"),
            TranscriptEntry::output("home/"),
            TranscriptEntry::output("var/"),
            TranscriptEntry::output("readme.txt"),
        ]
    );
}

#[test]
fn teardown_mid_autoplay_freezes_transcript() {
    let sched = ManualScheduler::new(0);
    let session = session_with(&sched, options(&["about", "skills", "resume"], false));
    session.start();

    sched.advance(Duration::from_secs(2));
    let frozen = session.transcript();
    session.teardown();
    assert_eq!(session.pending_timers(), 0);

    sched.advance(Duration::from_secs(60));
    assert_eq!(session.transcript(), frozen);
    assert_eq!(session.submit("whoami"), SubmitStatus::TornDown);
}

#[test]
fn custom_commands_override_and_report_outcomes() {
    init_logging();
    let sched = ManualScheduler::new(0);
    let seen: Rc<RefCell<Vec<(String, Outcome)>>> = Rc::default();
    let log = Rc::clone(&seen);

    let session = Session::builder(Rc::new(sched.clone()), Rc::new(sched.clone()))
        .options(options(&[], false))
        .command(Command::custom("whoami", "Custom identity", "whoami", |_| {
            Ok(Output::text("guest"))
        }))
        .command(Command::custom("fail", "Always fails", "fail", |_| {
            Err(CommandError::failed("boom"))
        }))
        .on_command(move |name, _, outcome| log.borrow_mut().push((name.to_string(), outcome)))
        .build()
        .unwrap();

    assert_eq!(contents(&run(&session, &sched, "whoami"))[1], "guest");
    let failed = run(&session, &sched, "fail");
    assert_eq!(failed[1], TranscriptEntry::error("Error: boom"));
    run(&session, &sched, "nope");
    run(&session, &sched, "   ");
    assert!(run(&session, &sched, "clear").is_empty());

    assert_eq!(
        *seen.borrow(),
        vec![
            ("whoami".to_string(), Outcome::Success),
            ("fail".to_string(), Outcome::Error),
            ("nope".to_string(), Outcome::NotFound),
        ]
    );
}
