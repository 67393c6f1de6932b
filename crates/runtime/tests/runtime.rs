mod common;

use std::time::Duration;

use common::{Recorder, content};
use crawl_core::{Command, Cue, Direction, GameError, ItemId};
use crawl_runtime::{GameEvent, Runtime, RuntimeConfig, RuntimeError, Topic};

fn manual_clock() -> RuntimeConfig {
    RuntimeConfig {
        game_seed: Some(42),
        tick_interval: None,
        ..RuntimeConfig::default()
    }
}

#[tokio::test]
async fn commands_apply_in_order_of_receipt() {
    let runtime = Runtime::builder()
        .config(manual_clock())
        .content(content())
        .build()
        .unwrap();
    let handle = runtime.handle();

    handle.dispatch(Command::take("sword")).await.unwrap();
    handle
        .dispatch(Command::move_to(Direction::East))
        .await
        .unwrap();

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.current_room_id.as_str(), "river");
    assert_eq!(state.equipped.weapon, Some(ItemId::from("sword")));
    assert_eq!(state.nonce, 2);
    assert_eq!(state.game_seed, runtime.game_seed());

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejection_surfaces_engine_error() {
    let runtime = Runtime::builder()
        .config(manual_clock())
        .content(content())
        .build()
        .unwrap();
    let handle = runtime.handle();

    let error = handle
        .dispatch(Command::move_to(Direction::South))
        .await
        .unwrap_err();

    match &error {
        RuntimeError::Rejected(inner) => assert_eq!(inner.error_code(), "NAVIGATION_NO_EXIT"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(error.user_message().as_deref(), Some("You can't go that way."));
}

#[tokio::test]
async fn manual_advance_runs_scheduled_reveal() {
    let runtime = Runtime::builder()
        .config(manual_clock())
        .content(content())
        .build()
        .unwrap();
    let handle = runtime.handle();

    handle
        .dispatch(Command::move_to(Direction::East))
        .await
        .unwrap();
    assert_eq!(handle.pending_tasks().await.unwrap(), 1);

    let ran = handle.advance(Duration::from_secs(1)).await.unwrap();
    assert_eq!(ran, 1);
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.perceived_room_id, state.current_room_id);
}

#[tokio::test(start_paused = true)]
async fn ticking_worker_reveals_on_its_own() {
    let config = RuntimeConfig {
        game_seed: Some(1),
        tick_interval: Some(Duration::from_millis(50)),
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::builder()
        .config(config)
        .content(content())
        .build()
        .unwrap();
    let handle = runtime.handle();

    handle
        .dispatch(Command::move_to(Direction::East))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(handle.pending_tasks().await.unwrap(), 0);
    let state = handle.query_state().await.unwrap();
    assert_eq!(state.perceived_room_id.as_str(), "river");
}

#[tokio::test]
async fn subscribers_see_log_and_snapshots() {
    let recorder = Recorder::default();
    let runtime = Runtime::builder()
        .config(manual_clock())
        .content(content())
        .cues(recorder.clone())
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut log_rx = handle.subscribe(Topic::Log);
    let mut state_rx = handle.subscribe(Topic::State);

    handle.dispatch(Command::take("sword")).await.unwrap();

    match log_rx.recv().await.unwrap() {
        GameEvent::LogAppended(entry) => assert!(entry.text.contains("Sword")),
        other => panic!("unexpected event {other:?}"),
    }
    match state_rx.recv().await.unwrap() {
        GameEvent::StateChanged { nonce, state } => {
            assert_eq!(nonce, 1);
            assert!(state.equipped.weapon.is_some());
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(recorder.cues(), vec![Cue::ItemPickup, Cue::ItemEquip]);
}

#[tokio::test]
async fn building_without_content_fails() {
    let error = Runtime::builder().build().err().unwrap();
    assert!(matches!(error, RuntimeError::MissingContent));
}
