use chrono::Duration;
use sessiondraft::core::elapsed::{current_elapsed_display, current_elapsed_seconds};
use sessiondraft::models::SessionDraft;
use sessiondraft::utils::time::format_elapsed_time;

mod common;
use common::t0;

#[test]
fn test_live_elapsed_while_running() {
    let now = t0();
    let draft = SessionDraft {
        is_session_running: true,
        elapsed_seconds: 60,
        session_started_at: Some(now - Duration::milliseconds(30_000)),
        ..SessionDraft::new("s")
    };

    assert_eq!(current_elapsed_seconds(&draft, now), 90);
    // partial seconds are floored
    assert_eq!(
        current_elapsed_seconds(&draft, now + Duration::milliseconds(999)),
        90
    );
    assert_eq!(current_elapsed_display(&draft, now), "00:01:30");
}

#[test]
fn test_live_elapsed_ignores_start_when_not_running() {
    let now = t0();
    let draft = SessionDraft {
        is_session_running: false,
        elapsed_seconds: 60,
        session_started_at: Some(now - Duration::hours(5)),
        ..SessionDraft::new("s")
    };

    assert_eq!(current_elapsed_seconds(&draft, now), 60);
}

#[test]
fn test_live_elapsed_clamps_clock_skew() {
    let now = t0();
    let draft = SessionDraft {
        is_session_running: true,
        elapsed_seconds: 15,
        session_started_at: Some(now + Duration::seconds(30)),
        ..SessionDraft::new("s")
    };

    assert_eq!(current_elapsed_seconds(&draft, now), 15);
}

#[test]
fn test_format_elapsed_time() {
    assert_eq!(format_elapsed_time(0), "00:00:00");
    assert_eq!(format_elapsed_time(5), "00:00:05");
    assert_eq!(format_elapsed_time(3661), "01:01:01");
    assert_eq!(format_elapsed_time(108_000), "30:00:00");
    assert_eq!(format_elapsed_time(360_000 + 59), "100:00:59");
}
