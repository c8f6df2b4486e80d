//! Tests for the focus session state machine.

use super::*;

fn session() -> FocusSession {
    FocusSession::new(TaskId::from("task-1"))
}

fn assert_progress_in_range(session: &FocusSession) {
    let progress = session.progress();
    assert!((0.0..=1.0).contains(&progress), "progress {progress} out of range");
    assert!(session.remaining_seconds() <= session.total_seconds());
}

#[test]
fn test_initial_state() {
    let session = session();
    assert_eq!(session.total_seconds(), 1200);
    assert_eq!(session.remaining_seconds(), 1200);
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert!(!session.is_running());
    assert!(!session.is_started());
    assert!(!session.completed_naturally());
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn test_custom_duration_is_floored() {
    let session = FocusSession::with_duration(TaskId::from("t"), 10);
    assert_eq!(session.remaining_seconds(), MIN_FOCUS_SECONDS);
}

#[test]
fn test_decrease_is_floored_at_one_minute() {
    let mut session = session();
    for _ in 0..4 {
        assert!(session.adjust_duration(DurationStep::SubtractFiveMinutes));
    }
    assert_eq!(session.remaining_seconds(), 60);

    assert!(!session.adjust_duration(DurationStep::SubtractFiveMinutes));
    assert_eq!(session.remaining_seconds(), 60);
    assert_eq!(session.total_seconds(), 60);
}

#[test]
fn test_decrease_rejected_when_clock_is_below_floor() {
    let mut session = session();
    session.start();
    for _ in 0..1170 {
        session.tick();
    }
    assert_eq!(session.remaining_seconds(), 30);

    assert!(!session.adjust_duration(DurationStep::SubtractMinute));
    assert_eq!(session.remaining_seconds(), 30);
    assert_eq!(session.total_seconds(), 1200);

    assert!(session.adjust_duration(DurationStep::AddMinute));
    assert_eq!(session.remaining_seconds(), 90);
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn test_total_tracks_remaining_before_start() {
    let mut session = session();
    session.adjust_duration(DurationStep::AddFiveMinutes);
    assert_eq!(session.remaining_seconds(), 1500);
    assert_eq!(session.total_seconds(), 1500);

    session.adjust_duration(DurationStep::SubtractMinute);
    assert_eq!(session.total_seconds(), 1440);
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn test_total_only_grows_after_start() {
    let mut session = session();
    session.start();
    for _ in 0..100 {
        session.tick();
    }
    assert_eq!(session.remaining_seconds(), 1100);

    session.adjust_duration(DurationStep::SubtractFiveMinutes);
    assert_eq!(session.remaining_seconds(), 800);
    assert_eq!(session.total_seconds(), 1200);
    assert_progress_in_range(&session);

    session.adjust_duration(DurationStep::AddFiveMinutes);
    session.adjust_duration(DurationStep::AddFiveMinutes);
    session.adjust_duration(DurationStep::AddFiveMinutes);
    assert_eq!(session.remaining_seconds(), 1700);
    assert_eq!(session.total_seconds(), 1700);
    assert_progress_in_range(&session);
}

#[test]
fn test_adjust_while_paused() {
    let mut session = session();
    session.start();
    session.toggle_running();
    assert_eq!(session.phase(), SessionPhase::Paused);
    assert!(session.adjust_duration(DurationStep::AddMinute));
    assert_eq!(session.remaining_seconds(), 1260);
}

#[test]
fn test_adjust_rejected_after_end() {
    let mut session = session();
    session.end_session();
    assert!(!session.adjust_duration(DurationStep::AddMinute));
    assert_eq!(session.remaining_seconds(), 1200);
}

#[test]
fn test_start_and_toggle() {
    let mut session = session();
    assert!(session.start());
    assert!(session.is_running());
    assert!(session.is_started());
    assert!(session.started_at().is_some());
    assert!(!session.start(), "start only applies to a ready session");

    assert!(session.toggle_running());
    assert_eq!(session.phase(), SessionPhase::Paused);
    assert!(session.is_started());
    assert_eq!(session.remaining_seconds(), 1200);

    assert!(session.toggle_running());
    assert!(session.is_running());
}

#[test]
fn test_toggle_starts_ready_session() {
    let mut session = session();
    assert!(session.toggle_running());
    assert!(session.is_running());
    assert!(session.is_started());
}

#[test]
fn test_tick_only_counts_while_running() {
    let mut session = session();
    session.tick();
    assert_eq!(session.remaining_seconds(), 1200);

    session.start();
    session.tick();
    session.tick();
    assert_eq!(session.remaining_seconds(), 1198);

    session.toggle_running();
    session.tick();
    assert_eq!(session.remaining_seconds(), 1198);
}

#[test]
fn test_natural_expiry() {
    let mut session = FocusSession::with_duration(TaskId::from("task-1"), 60);
    session.start();

    let mut ended_on = None;
    for n in 1..=61 {
        if session.tick() {
            ended_on = Some(n);
        }
        assert_progress_in_range(&session);
    }

    assert_eq!(ended_on, Some(60));
    assert_eq!(session.remaining_seconds(), 0);
    assert!(!session.is_running());
    assert!(session.completed_naturally());
    assert_eq!(session.phase(), SessionPhase::Ended { natural: true });
    assert!(session.ended_at().is_some());
    assert_eq!(session.progress(), 1.0);
}

#[test]
fn test_start_with_no_time_left_ends_immediately() {
    let mut session = session();
    session.remaining_seconds = 0;

    assert!(session.start());
    assert!(session.completed_naturally());
    assert!(!session.is_running());
    assert!(session.claim_celebration());
}

#[test]
fn test_manual_end() {
    let mut session = session();
    session.start();
    session.tick();
    assert!(session.end_session());

    assert!(!session.is_running());
    assert_eq!(session.phase(), SessionPhase::Ended { natural: false });
    assert!(!session.completed_naturally());
    assert!(!session.end_session());
    assert_eq!(session.remaining_seconds(), 1199);
}

#[test]
fn test_close_request_before_start_discards() {
    let mut session = session();
    assert_eq!(session.close_request(), CloseAction::Discard);
}

#[test]
fn test_close_request_while_running_or_paused_ends() {
    let mut running = session();
    running.start();
    assert_eq!(running.close_request(), CloseAction::ShowSummary);
    assert_eq!(running.phase(), SessionPhase::Ended { natural: false });

    let mut paused = session();
    paused.start();
    paused.toggle_running();
    assert_eq!(paused.close_request(), CloseAction::ShowSummary);
    assert!(paused.is_ended());
}

#[test]
fn test_close_request_on_summary_finishes() {
    let mut session = session();
    session.end_session();
    assert_eq!(session.close_request(), CloseAction::Finish);
}

#[test]
fn test_summary_edits_require_ended_session() {
    let mut session = session();
    session.start();
    assert!(!session.toggle_step_selection(&StepId::from("step-1a")));
    assert!(!session.add_manual_entry(EntryKind::Next, "too early"));
    assert!(session.summary().selected().is_empty());
    assert!(session.summary().entries().is_empty());
}

#[test]
fn test_step_selection_toggles_both_ways() {
    let mut session = session();
    session.end_session();
    let step = StepId::from("step-1a");

    session.toggle_step_selection(&step);
    assert!(session.summary().is_selected(&step));
    session.toggle_step_selection(&step);
    assert!(!session.summary().is_selected(&step));
}

#[test]
fn test_manual_entries_are_trimmed_and_blank_rejected() {
    let mut session = session();
    session.end_session();

    assert!(session.add_manual_entry(EntryKind::Next, "  Revise notes  "));
    assert!(!session.add_manual_entry(EntryKind::Next, "   "));
    assert!(!session.add_manual_entry(EntryKind::Completed, ""));
    assert!(session.add_manual_entry(EntryKind::Completed, "Read chapter"));

    let entries = session.summary().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Revise notes");
    assert_eq!(entries[1].kind, EntryKind::Completed);
}

#[test]
fn test_finish_builds_reconciliation() {
    let mut session = session();
    session.start();
    session.end_session();
    session.toggle_step_selection(&StepId::from("step-1b"));
    session.toggle_step_selection(&StepId::from("step-1a"));
    session.add_manual_entry(EntryKind::Next, "first next");
    session.add_manual_entry(EntryKind::Completed, "first done");
    session.add_manual_entry(EntryKind::Next, "second next");

    let message = session.finish().expect("ended session finishes");
    assert_eq!(message.task_id, "task-1");
    assert_eq!(
        message.completed_step_ids,
        vec![StepId::from("step-1b"), StepId::from("step-1a")]
    );
    assert_eq!(message.new_next_steps, vec!["first next", "second next"]);
    assert_eq!(message.new_completed_steps, vec!["first done"]);
    assert!(!message.is_empty());
}

#[test]
fn test_finish_requires_ended_session() {
    assert!(session().finish().is_none());

    let mut running = session();
    running.start();
    assert!(running.finish().is_none());

    let mut paused = session();
    paused.start();
    paused.toggle_running();
    assert!(paused.finish().is_none());
}

#[test]
fn test_celebration_fires_once_for_natural_end() {
    let mut session = FocusSession::with_duration(TaskId::from("task-1"), 60);
    session.start();
    assert!(!session.claim_celebration());
    for _ in 0..60 {
        session.tick();
    }

    assert!(session.claim_celebration());
    for _ in 0..5 {
        assert!(!session.claim_celebration());
    }
}

#[test]
fn test_no_celebration_for_manual_end() {
    let mut session = session();
    session.start();
    session.end_session();
    assert!(!session.claim_celebration());
}
