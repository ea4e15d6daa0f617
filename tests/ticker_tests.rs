use sessiondraft::core::resume::{ResumeDecision, resume_decision};
use sessiondraft::core::ticker::DisplayTicker;
use sessiondraft::models::SessionDraft;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

mod common;

#[test]
fn test_ticker_fires_and_stops_on_cancel() {
    let count = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&count);

    let ticker = DisplayTicker::start(Duration::from_millis(10), move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    assert!(ticker.is_active());

    thread::sleep(Duration::from_millis(80));
    let ticks = ticker.cancel();

    let after_cancel = count.load(Ordering::SeqCst);
    assert!(after_cancel >= 1);
    assert_eq!(ticks, after_cancel);

    thread::sleep(Duration::from_millis(50));
    assert_eq!(count.load(Ordering::SeqCst), after_cancel);
}

#[test]
fn test_ticker_stops_when_dropped() {
    let count = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&count);

    {
        let _ticker = DisplayTicker::start(Duration::from_millis(10), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(50));
    }

    let after_drop = count.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(count.load(Ordering::SeqCst), after_drop);
}

#[test]
fn test_resume_prompt_only_for_saved_unfinished_drafts() {
    let fresh = SessionDraft::new("s");
    assert_eq!(resume_decision(&fresh), ResumeDecision::Fresh);

    let saved = SessionDraft {
        last_saved_at: Some(common::t0()),
        ..SessionDraft::new("s")
    };
    assert_eq!(resume_decision(&saved), ResumeDecision::Prompt);

    let completed = SessionDraft {
        last_saved_at: Some(common::t0()),
        is_completed: true,
        ..SessionDraft::new("s")
    };
    assert_eq!(resume_decision(&completed), ResumeDecision::Fresh);
}
