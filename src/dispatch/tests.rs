//! Unit tests for session dispatch

use super::*;
use crate::capability::{ConnectionWatch, ReconnectPrompt, SharedConnection};
use crate::config::PaneshiftConfig;
use std::sync::mpsc::channel;
use std::sync::Arc;

fn config(installed: &[&str]) -> PaneshiftConfig {
    let mut config = PaneshiftConfig::default();
    config.surface.width = 800;
    config.surface.height = 600;
    config.progression.installed = installed.iter().map(|s| s.to_string()).collect();
    config
}

/// Run a probe on the owner thread and wait for its result.
fn probe<T: Send + 'static>(
    handle: &SessionHandle,
    f: impl FnOnce(&mut WindowManager) -> T + Send + 'static,
) -> T {
    let (tx, rx) = channel();
    handle.submit(move |wm| {
        let _ = tx.send(f(wm));
    });
    rx.recv().expect("owner thread dropped the probe")
}

#[test]
fn test_jobs_run_in_submission_order() {
    let session = Session::from_config(config(&["wm_unlimited_windows"])).unwrap();
    let handle = session.handle();

    for i in 0..3 {
        handle.request_open(WindowRequest::regular("terminal", format!("win-{i}")));
    }

    let titles = probe(&handle, |wm| {
        wm.windows().map(|w| w.title.clone()).collect::<Vec<_>>()
    });
    assert_eq!(titles, vec!["win-0", "win-1", "win-2"]);

    session.shutdown();
}

#[test]
fn test_submissions_after_shutdown_are_dropped() {
    let session = Session::from_config(config(&[])).unwrap();
    let handle = session.handle();
    session.shutdown();

    // Must not panic or block
    handle.request_open(WindowRequest::regular("terminal", "late"));
    handle.close(WindowId(1));
}

#[test]
fn test_affirmative_reconnect_reopens_the_request() {
    struct AcceptPrompt;
    impl ReconnectPrompt for AcceptPrompt {
        fn confirm_reconnect(&self, on_answer: Box<dyn FnOnce(bool) + Send>) {
            on_answer(true);
        }
    }

    let mut manager = WindowManager::from_config(&config(&["mud_fundamentals"]));
    let connection = Arc::new(SharedConnection::new(false));
    manager.set_connection(Arc::clone(&connection) as Arc<dyn ConnectionWatch>);
    manager.set_reconnect_prompt(Arc::new(AcceptPrompt));

    let session = Session::spawn(manager).unwrap();
    let handle = session.handle();

    handle.request_open(WindowRequest::regular("chat", "Chat"));

    // Fence: once the admission job has run, the re-submitted request
    // is already queued, so the next probe observes its result.
    probe(&handle, |_| ());

    let classes = probe(&handle, |wm| {
        wm.windows().map(|w| w.class.clone()).collect::<Vec<_>>()
    });
    assert_eq!(classes, vec!["chat"]);
    assert!(connection.is_connected());

    session.shutdown();
}

#[test]
fn test_negative_reconnect_leaves_state_untouched() {
    struct RefusePrompt;
    impl ReconnectPrompt for RefusePrompt {
        fn confirm_reconnect(&self, on_answer: Box<dyn FnOnce(bool) + Send>) {
            on_answer(false);
        }
    }

    let mut manager = WindowManager::from_config(&config(&["mud_fundamentals"]));
    let connection = Arc::new(SharedConnection::new(false));
    manager.set_connection(Arc::clone(&connection) as Arc<dyn ConnectionWatch>);
    manager.set_reconnect_prompt(Arc::new(RefusePrompt));

    let session = Session::spawn(manager).unwrap();
    let handle = session.handle();

    handle.request_open(WindowRequest::regular("chat", "Chat"));

    let count = probe(&handle, |wm| wm.registry().len());
    assert_eq!(count, 0);
    assert!(!connection.is_connected());

    session.shutdown();
}
