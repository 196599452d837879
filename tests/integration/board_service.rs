//! Integration tests for the serialized board service.
//!
//! Many handles issue commands concurrently; the single service task
//! applies them one at a time, so duplicate moves collapse to one.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use taskboard::service::{BoardService, DEFAULT_QUEUE_CAPACITY, ServiceError};
use taskboard_core::{Board, Outcome, Skip, ViewMode};

#[tokio::test]
async fn concurrent_completes_apply_once() {
    let handle = BoardService::spawn(Board::with_seed(["X"]), DEFAULT_QUEUE_CAPACITY);
    let x = handle.snapshot().await.unwrap().active[0].id;

    let mut joins = Vec::new();
    for _ in 0..8 {
        let handle = handle.clone();
        joins.push(tokio::spawn(async move { handle.complete_task(x).await }));
    }

    let mut applied = 0;
    for join in joins {
        match join.await.unwrap().unwrap() {
            Outcome::Applied(_) => applied += 1,
            Outcome::Skipped(reason) => assert_eq!(reason, Skip::UnknownTask),
        }
    }
    assert_eq!(applied, 1);

    let snap = handle.snapshot().await.unwrap();
    assert!(snap.active.is_empty());
    assert_eq!(snap.completed.len(), 1);
    assert_eq!(snap.view, ViewMode::Completed);
}

#[tokio::test]
async fn concurrent_adds_keep_unique_ids() {
    let handle = BoardService::spawn(Board::new(), 4);

    let mut joins = Vec::new();
    for i in 0..32 {
        let handle = handle.clone();
        joins.push(tokio::spawn(
            async move { handle.add_task(format!("task {i}")).await },
        ));
    }
    for join in joins {
        assert!(join.await.unwrap().unwrap().is_applied());
    }

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.active.len(), 32);
    let mut ids: Vec<_> = snap.active.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}

#[tokio::test]
async fn round_trip_through_service() {
    let handle = BoardService::spawn(Board::with_seed(["A", "B", "C", "D"]), 8);
    let snap = handle.snapshot().await.unwrap();
    let (b, d) = (snap.active[1].id, snap.active[3].id);

    assert!(handle.reorder_active(d, b).await.unwrap().is_applied());
    assert_eq!(
        handle.reorder_active(d, d).await.unwrap(),
        Outcome::Skipped(Skip::SameTask)
    );
    let texts: Vec<String> = handle
        .snapshot()
        .await
        .unwrap()
        .active
        .iter()
        .map(|t| t.text.to_string())
        .collect();
    assert_eq!(texts, ["A", "D", "B", "C"]);

    assert!(handle.complete_task(d).await.unwrap().is_applied());
    let done = handle.snapshot().await.unwrap().completed[0].id;
    assert!(handle.restore_task(done).await.unwrap().is_applied());
    assert!(handle.delete_task(b).await.unwrap().is_applied());
    assert_eq!(
        handle.add_task("  ").await.unwrap(),
        Outcome::Skipped(Skip::EmptyText)
    );

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.view, ViewMode::Active);
    let texts: Vec<&str> = snap.active.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["A", "C", "D"]);
}

#[tokio::test]
async fn clones_keep_service_alive() {
    let handle = BoardService::spawn(Board::with_seed(["A"]), 1);
    let other = handle.clone();
    drop(handle);
    assert_eq!(other.snapshot().await.unwrap().active.len(), 1);
}

#[tokio::test]
async fn shutdown_closes_every_handle() {
    let handle = BoardService::spawn(Board::new(), 1);
    let other = handle.clone();
    handle.shutdown().await.unwrap();

    assert_eq!(other.add_task("late").await, Err(ServiceError::Closed));
    assert_eq!(other.snapshot().await.map(|_| ()), Err(ServiceError::Closed));
    assert_eq!(handle.shutdown().await, Err(ServiceError::Closed));
}
