//! Plain-text views of the game state.

use std::fmt::Write as _;

use crawl_core::{GameState, ItemId, ItemOracle, LogEntry, LogKind};

fn item_name<'a>(items: &'a dyn ItemOracle, id: &'a ItemId) -> &'a str {
    items
        .definition(id)
        .map(|definition| definition.name.as_str())
        .unwrap_or(id.as_str())
}

fn slot_name<'a>(items: &'a dyn ItemOracle, id: Option<&'a ItemId>) -> &'a str {
    id.map_or("-", |id| item_name(items, id))
}

pub fn log_line(entry: &LogEntry) -> String {
    match entry.kind {
        LogKind::RoomTitle => format!("\n== {} ==", entry.text),
        LogKind::RoomDescription | LogKind::Narration | LogKind::Info => entry.text.clone(),
        kind => format!("[{kind}] {}", entry.text),
    }
}

/// Room name, exits, floor items and any enemy.
pub fn room(state: &GameState, items: &dyn ItemOracle) -> String {
    let mut out = String::new();
    let Some(room) = state.current_room() else {
        return out;
    };
    let _ = writeln!(out, "== {} ==", room.name);
    if !room.description.is_empty() {
        let _ = writeln!(out, "{}", room.description);
    }

    let exits: Vec<String> = room
        .exits
        .keys()
        .map(|direction| {
            if room.locked_exits.contains_key(direction) {
                format!("{direction} (locked)")
            } else {
                direction.to_string()
            }
        })
        .collect();
    let exits = if exits.is_empty() {
        "none".to_owned()
    } else {
        exits.join(", ")
    };
    let _ = writeln!(out, "Exits: {exits}");

    if !room.items.is_empty() {
        let names: Vec<&str> = room.items.iter().map(|id| item_name(items, id)).collect();
        let _ = writeln!(out, "You see: {}", names.join(", "));
    }
    if let Some(enemy) = room.living_enemy() {
        let _ = writeln!(out, "{} stands here ({}/{}).", enemy.name, enemy.hp, enemy.max_hp);
    }
    out
}

/// Equipment, numbered inventory slots and stats.
pub fn inventory(state: &GameState, items: &dyn ItemOracle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Weapon: {}  Armor: {}",
        slot_name(items, state.equipped.weapon.as_ref()),
        slot_name(items, state.equipped.armor.as_ref())
    );
    for index in 0..state.inventory.capacity() {
        let _ = writeln!(
            out,
            "  {}. {}",
            index + 1,
            slot_name(items, state.inventory.slot(index))
        );
    }
    let _ = writeln!(out, "{}", status(state));
    out
}

/// One-line health and combat summary.
pub fn status(state: &GameState) -> String {
    let mut line = format!(
        "HP {}/{}  ATK {}  DEF {}",
        state.health, state.max_health, state.attack, state.defense
    );
    if let Some(combat) = &state.combat
        && let Some(enemy) = state.current_room().and_then(|room| room.enemy.as_ref())
    {
        let _ = write!(
            line,
            "  | round {} vs {} {}/{}",
            combat.round, enemy.name, enemy.hp, enemy.max_hp
        );
        if combat.can_riposte {
            line.push_str("  (riposte ready)");
        }
    }
    line
}
