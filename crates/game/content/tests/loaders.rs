use std::fs;

use crawl_content::{ContentFactory, builtin};
use crawl_core::{
    Command, Direction, GameEngine, GameError, GameState, ItemId, ItemOracle, PcgRng, WorldOracle,
};

const ITEMS: &str = r#"(items: [
    (id: "brass-key", name: "Brass Key", kind: key),
    (id: "club", name: "Club", kind: weapon, stats: (attack: 3)),
])"#;

const ROOMS: &str = r#"(
    start_room: "porch",
    rooms: [
        (
            id: "porch",
            name: "Porch",
            exits: { north: "parlor" },
            locked_exits: { north: (key_id: "brass-key", locked_message: "The front door is locked.") },
            items: ["club", "brass-key"],
        ),
        (id: "parlor", name: "Parlor", exits: { south: "porch" }),
    ],
)"#;

#[test]
fn factory_loads_directory_without_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.ron"), ITEMS).unwrap();
    fs::write(dir.path().join("rooms.ron"), ROOMS).unwrap();

    let content = ContentFactory::new(dir.path()).load().unwrap();

    assert_eq!(content.world.start_room().as_str(), "porch");
    assert!(content.items.definition(&ItemId::from("club")).is_some());
    assert_eq!(content.config, crawl_core::GameConfig::default());
}

#[test]
fn factory_reports_cross_reference_errors_with_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.ron"), r#"(items: [])"#).unwrap();
    fs::write(dir.path().join("rooms.ron"), ROOMS).unwrap();

    let error = ContentFactory::new(dir.path()).load().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Invalid content"));
    assert!(message.contains("brass-key"));
}

#[test]
fn factory_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let error = ContentFactory::new(dir.path()).load().unwrap_err();
    assert!(error.to_string().contains("items.ron"));
}

#[test]
fn loaded_content_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.ron"), ITEMS).unwrap();
    fs::write(dir.path().join("rooms.ron"), ROOMS).unwrap();
    fs::write(dir.path().join("config.toml"), "inventory_capacity = 2").unwrap();
    let content = ContentFactory::new(dir.path()).load().unwrap();
    let rng = PcgRng;
    let env = content.env(&rng);
    let mut state = GameState::new(&env, 11);
    let mut engine = GameEngine::new(&mut state);

    let error = engine
        .execute(env, &Command::move_to(Direction::North))
        .unwrap_err();
    assert_eq!(
        error.user_message().as_deref(),
        Some("The front door is locked.")
    );

    engine.execute(env, &Command::take("brass-key")).unwrap();
    engine.execute(env, &Command::unlock(Direction::North, "brass-key")).unwrap();
    engine.execute(env, &Command::move_to(Direction::North)).unwrap();

    assert_eq!(state.current_room_id.as_str(), "parlor");
}

#[test]
fn builtin_world_starts_in_the_cell() {
    let content = builtin::world().unwrap();
    let rng = PcgRng;
    let env = content.env(&rng);
    let state = GameState::new(&env, 1);

    assert_eq!(state.current_room_id.as_str(), "cell");
    assert_eq!(state.inventory.capacity(), 4);
    assert!(state.current_room().unwrap().items.contains(&ItemId::from("rusty-dagger")));
}
