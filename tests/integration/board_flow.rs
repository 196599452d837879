//! Integration tests for the task board: end-to-end flows across the
//! store and the view controller.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use taskboard_core::{Board, Command, Outcome, Skip, StoreEvent, TaskId, ViewMode};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn active_texts(board: &Board) -> Vec<String> {
    board.active().iter().map(|t| t.text.to_string()).collect()
}

fn completed_texts(board: &Board) -> Vec<String> {
    board.completed().iter().map(|t| t.text.to_string()).collect()
}

fn demo_board() -> Board {
    Board::with_seed([
        "Patch proxies to 12.2.18",
        "Prepare AI Steering Committee slides",
        "Finish CrowdStrike DFD",
        "Schedule PCI policy review",
    ])
}

// ---------------------------------------------------------------------------
// Complete / restore round trip
// ---------------------------------------------------------------------------

#[test]
fn complete_then_restore_round_trip() {
    let mut board = Board::with_seed(["X"]);
    assert_eq!(board.view(), ViewMode::Active);
    let x = board.active()[0].id;

    assert_eq!(
        board.complete_task(x),
        Outcome::Applied(StoreEvent::Completed)
    );
    assert!(board.active().is_empty());
    assert_eq!(completed_texts(&board), ["X"]);
    assert_eq!(board.view(), ViewMode::Completed);
    let x1 = board.completed()[0].id;
    assert_ne!(x1, x);

    assert_eq!(board.restore_task(x1), Outcome::Applied(StoreEvent::Restored));
    assert_eq!(active_texts(&board), ["X"]);
    assert!(board.completed().is_empty());
    assert_eq!(board.view(), ViewMode::Active);
    let x2 = board.active()[0].id;
    assert_ne!(x2, x);
    assert_ne!(x2, x1);
}

#[test]
fn stale_ids_do_nothing_after_move() {
    let mut board = Board::with_seed(["X"]);
    let x = board.active()[0].id;
    let _ = board.complete_task(x);
    let x1 = board.completed()[0].id;
    let _ = board.restore_task(x1);

    // Both earlier ids are gone; only the newest record answers.
    assert_eq!(board.complete_task(x), Outcome::Skipped(Skip::UnknownTask));
    assert_eq!(board.restore_task(x1), Outcome::Skipped(Skip::UnknownTask));
    assert_eq!(board.delete_task(x1), Outcome::Skipped(Skip::UnknownTask));
    assert_eq!(active_texts(&board), ["X"]);
}

#[test]
fn completed_list_is_newest_first() {
    let mut board = demo_board();
    for _ in 0..3 {
        let first = board.active()[0].id;
        let _ = board.complete_task(first);
    }
    assert_eq!(
        completed_texts(&board),
        [
            "Finish CrowdStrike DFD",
            "Prepare AI Steering Committee slides",
            "Patch proxies to 12.2.18",
        ]
    );
    assert_eq!(active_texts(&board), ["Schedule PCI policy review"]);
}

#[test]
fn restore_goes_to_end_of_active() {
    let mut board = demo_board();
    let first = board.active()[0].id;
    let _ = board.complete_task(first);
    let done = board.completed()[0].id;
    let _ = board.restore_task(done);
    assert_eq!(
        active_texts(&board).last().map(String::as_str),
        Some("Patch proxies to 12.2.18")
    );
}

// ---------------------------------------------------------------------------
// Drag reorder
// ---------------------------------------------------------------------------

#[test]
fn drop_last_onto_second() {
    let mut board = Board::with_seed(["A", "B", "C", "D"]);
    let d = board.active()[3].id;
    let b = board.active()[1].id;
    let _ = board.reorder_active(d, b);
    assert_eq!(active_texts(&board), ["A", "D", "B", "C"]);
}

#[test]
fn drop_first_onto_last() {
    let mut board = Board::with_seed(["A", "B", "C", "D"]);
    let a = board.active()[0].id;
    let d = board.active()[3].id;
    let _ = board.reorder_active(a, d);
    assert_eq!(active_texts(&board), ["B", "C", "D", "A"]);
}

#[test]
fn drop_onto_self_is_skipped() {
    let mut board = Board::with_seed(["A", "B"]);
    let a = board.active()[0].id;
    assert_eq!(board.reorder_active(a, a), Outcome::Skipped(Skip::SameTask));
    assert_eq!(active_texts(&board), ["A", "B"]);
}

#[test]
fn drop_after_target_completed_is_skipped() {
    let mut board = Board::with_seed(["A", "B", "C"]);
    let a = board.active()[0].id;
    let c = board.active()[2].id;
    let _ = board.complete_task(c);
    assert_eq!(board.reorder_active(a, c), Outcome::Skipped(Skip::UnknownTask));
    assert_eq!(active_texts(&board), ["A", "B"]);
}

// ---------------------------------------------------------------------------
// Input handling and view switching
// ---------------------------------------------------------------------------

#[test]
fn blank_add_creates_nothing() {
    let mut board = Board::with_seed(["A"]);
    board.set_view(ViewMode::Completed);
    assert_eq!(board.add_task("   "), Outcome::Skipped(Skip::EmptyText));
    assert_eq!(active_texts(&board), ["A"]);
    assert_eq!(board.view(), ViewMode::Completed);
}

#[test]
fn add_from_completed_tab_jumps_back() {
    let mut board = Board::new();
    board.set_view(ViewMode::Completed);
    let _ = board.add_task("  Rotate keys  ");
    assert_eq!(board.view(), ViewMode::Active);
    assert_eq!(active_texts(&board), ["Rotate keys"]);
}

#[test]
fn tab_click_after_complete_wins() {
    let mut board = Board::with_seed(["A"]);
    let a = board.active()[0].id;
    let _ = board.complete_task(a);
    board.set_view(ViewMode::Active);
    assert_eq!(board.view(), ViewMode::Active);
    assert_eq!(board.visible().len(), 0);
}

#[test]
fn delete_leaves_view_alone() {
    let mut board = Board::with_seed(["A", "B"]);
    let a = board.active()[0].id;
    let _ = board.complete_task(a);
    let done = board.completed()[0].id;
    assert_eq!(
        board.delete_task(done),
        Outcome::Applied(StoreEvent::Deleted {
            from: ViewMode::Completed
        })
    );
    assert_eq!(board.view(), ViewMode::Completed);
    assert!(board.completed().is_empty());
    assert_eq!(active_texts(&board), ["B"]);
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

#[test]
fn commands_replay_a_session() {
    let mut board = Board::new();
    let outcomes: Vec<Outcome> = ["one", "two", " ", "three"]
        .into_iter()
        .map(|t| board.apply(Command::Add(t.to_string())))
        .collect();
    assert_eq!(outcomes.iter().filter(|o| o.is_applied()).count(), 3);

    let three = board.active()[2].id;
    let one = board.active()[0].id;
    let _ = board.apply(Command::Reorder {
        task: three,
        target: one,
    });
    assert_eq!(active_texts(&board), ["three", "one", "two"]);

    let _ = board.apply(Command::Complete(three));
    assert_eq!(
        board.apply(Command::Complete(three)),
        Outcome::Skipped(Skip::UnknownTask)
    );
    assert_eq!(board.view(), ViewMode::Completed);
    assert_eq!(
        board.apply(Command::Delete(TaskId::new())),
        Outcome::Skipped(Skip::UnknownTask)
    );
    assert_eq!(board.store().len(), 3);
}
