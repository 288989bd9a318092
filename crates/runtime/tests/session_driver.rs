//! End-to-end tests driving a session through the runtime handle.

use std::sync::Arc;
use std::time::Duration;

use schulte_core::{SelectionOutcome, SessionConfig, SessionStatus};
use schulte_runtime::{Event, ManualClock, Runtime, SessionEvent, TimerEvent, Topic};

async fn play_expected(handle: &schulte_runtime::RuntimeHandle) -> SelectionOutcome {
    let snapshot = handle.query_snapshot().await.unwrap();
    let active = &snapshot.groups[snapshot.active_group];
    let expected = active.expected.expect("active group has a target");
    let index = snapshot
        .cells
        .iter()
        .position(|c| c.group == active.id && c.number == expected)
        .expect("expected cell present");
    handle.select_cell(index, None).await.unwrap()
}

#[tokio::test]
async fn full_game_through_the_handle() {
    let clock = Arc::new(ManualClock::new(1_000));
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3))
        .seed(42)
        .clock(clock.clone())
        .build();
    let handle = runtime.handle();
    let mut session_rx = handle.subscribe(Topic::Session);

    let snapshot = handle.start().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Running);
    assert_eq!(snapshot.cells.len(), 9);

    assert!(matches!(
        session_rx.recv().await.unwrap(),
        Event::Session(SessionEvent::Started)
    ));

    for turn in 0..9 {
        clock.advance(250);
        let outcome = play_expected(&handle).await;
        assert!(outcome.is_correct(), "turn {turn}");
        assert!(matches!(
            session_rx.recv().await.unwrap(),
            Event::Session(SessionEvent::Selection { .. })
        ));
    }

    // The 9th correct selection finishes the untimed session.
    let finished = session_rx.recv().await.unwrap();
    let Event::Session(SessionEvent::Finished {
        status,
        correct,
        wrong,
        elapsed_hms,
    }) = finished
    else {
        panic!("expected Finished event, got {finished:?}");
    };
    assert_eq!(status, SessionStatus::Finished);
    assert_eq!(correct, 9);
    assert_eq!(wrong, 0);
    assert_eq!(elapsed_hms, "00:00:02"); // 9 * 250ms

    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Finished);
    assert!(snapshot.to_report_json().unwrap().contains("records"));

    runtime.shutdown().await;
}

#[tokio::test]
async fn wrong_selection_is_reported_and_ignored_after_stop() {
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3))
        .seed(7)
        .build();
    let handle = runtime.handle();

    handle.start().await.unwrap();

    let snapshot = handle.query_snapshot().await.unwrap();
    let active = &snapshot.groups[snapshot.active_group];
    let expected = active.expected.unwrap();
    let wrong_index = snapshot
        .cells
        .iter()
        .position(|c| c.number != expected)
        .unwrap();
    let outcome = handle.select_cell(wrong_index, None).await.unwrap();
    assert_eq!(outcome, SelectionOutcome::Wrong);

    let snapshot = handle.stop().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Finished);
    assert_eq!(snapshot.wrong, 1);

    let outcome = handle.select_cell(0, None).await.unwrap();
    assert_eq!(outcome, SelectionOutcome::Ignored);

    runtime.shutdown().await;
}

#[tokio::test]
async fn reconfigure_drops_back_to_idle_with_a_new_table() {
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3))
        .seed(5)
        .build();
    let handle = runtime.handle();

    handle.start().await.unwrap();
    let snapshot = handle
        .configure(SessionConfig::default().with_grid_size(4).with_group_count(2))
        .await
        .unwrap();
    assert_eq!(snapshot.status, SessionStatus::Idle);
    assert_eq!(snapshot.cells.len(), 16);
    assert_eq!(snapshot.groups.len(), 2);

    // Idle tables ignore selections until the next start.
    let outcome = handle.select_cell(0, None).await.unwrap();
    assert_eq!(outcome, SelectionOutcome::Ignored);

    let snapshot = handle.start().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Running);

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn countdown_expiry_finishes_a_timed_session() {
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3).with_timed(1))
        .seed(9)
        .build();
    let handle = runtime.handle();
    let mut timer_rx = handle.subscribe(Topic::Timer);

    handle.start().await.unwrap();
    assert!(matches!(
        timer_rx.recv().await.unwrap(),
        Event::Timer(TimerEvent::CountdownStarted { minutes: 1 })
    ));

    // Clear the table once: timed mode rebuilds instead of finishing.
    for _ in 0..9 {
        play_expected(&handle).await;
    }
    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Running);
    assert_eq!(snapshot.correct, 9);

    // Jump past the one-minute countdown (auto-advanced paused time).
    tokio::time::sleep(Duration::from_secs(61)).await;
    assert!(matches!(
        timer_rx.recv().await.unwrap(),
        Event::Timer(TimerEvent::CountdownExpired)
    ));

    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Finished);

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn restart_supersedes_the_pending_countdown() {
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3).with_timed(1))
        .seed(11)
        .build();
    let handle = runtime.handle();

    handle.start().await.unwrap();
    tokio::time::sleep(Duration::from_secs(40)).await;

    // Restarting arms a fresh countdown; the old one must never fire.
    handle.start().await.unwrap();
    tokio::time::sleep(Duration::from_secs(40)).await;

    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(
        snapshot.status,
        SessionStatus::Running,
        "stale countdown fired"
    );

    tokio::time::sleep(Duration::from_secs(21)).await;
    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.status, SessionStatus::Finished);

    runtime.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn highlight_clears_after_the_timeout() {
    let runtime = Runtime::builder()
        .config(SessionConfig::default().with_grid_size(3))
        .seed(13)
        .build();
    let handle = runtime.handle();

    handle.start().await.unwrap();
    play_expected(&handle).await;

    let snapshot = handle.query_snapshot().await.unwrap();
    assert!(snapshot.click_index.is_some());

    tokio::time::sleep(schulte_runtime::HIGHLIGHT_TIMEOUT + Duration::from_millis(50)).await;
    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.click_index, None);
    assert!(snapshot.correct_index.is_some(), "trace highlight stays");

    runtime.shutdown().await;
}
