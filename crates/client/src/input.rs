//! Line parser for player input.

use crawl_core::{Command, Direction, EquipSlot, ItemId, PlayerAction};

/// What a line of input asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Forward to the engine.
    Game(Command),
    Look,
    Inventory,
    /// Print the state as JSON.
    Dump,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  north/south/east/west (n/s/e/w), go <direction>
  look, inventory (i), help, dump, quit
  take <item>, drop <item>, equip <item>, unequip weapon|armor
  use <item>, swap <slot> <slot>
  unlock <direction> with <key>
  fight, attack, block, parry, riposte
  restart";

/// Turns free text like `rusty dagger` into an id like `rusty-dagger`.
fn item_id(words: &[&str]) -> Option<ItemId> {
    if words.is_empty() {
        return None;
    }
    Some(ItemId::new(words.join("-").to_lowercase()))
}

pub fn parse(line: &str) -> Input {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Input::Empty;
    };
    let unknown = || Input::Unknown(line.trim().to_owned());

    if let Ok(direction) = verb.parse::<Direction>()
        && rest.is_empty()
    {
        return Input::Game(Command::move_to(direction));
    }
    if let Ok(action) = verb.parse::<PlayerAction>()
        && rest.is_empty()
    {
        return Input::Game(Command::combat(action));
    }

    match verb.to_lowercase().as_str() {
        "go" | "walk" => match rest {
            [direction] => direction
                .parse::<Direction>()
                .map(|direction| Input::Game(Command::move_to(direction)))
                .unwrap_or_else(|_| unknown()),
            _ => unknown(),
        },
        "look" | "l" => Input::Look,
        "inventory" | "inv" | "i" => Input::Inventory,
        "dump" => Input::Dump,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        "fight" => Input::Game(Command::start_combat()),
        "restart" => Input::Game(Command::Restart),
        "take" | "get" => item_id(rest).map_or_else(unknown, |item| Input::Game(Command::take(item))),
        "drop" => item_id(rest).map_or_else(unknown, |item| Input::Game(Command::drop_item(item))),
        "equip" | "wield" | "wear" => {
            item_id(rest).map_or_else(unknown, |item| Input::Game(Command::equip(item)))
        }
        "use" | "drink" | "eat" | "read" => {
            item_id(rest).map_or_else(unknown, |item| Input::Game(Command::use_item(item)))
        }
        "unequip" | "remove" => match rest {
            [slot] => slot
                .parse::<EquipSlot>()
                .map(|slot| Input::Game(Command::unequip(slot)))
                .unwrap_or_else(|_| unknown()),
            _ => unknown(),
        },
        "swap" => match rest {
            [from, to] => match (from.parse::<usize>(), to.parse::<usize>()) {
                // Slots are shown 1-based.
                (Ok(from), Ok(to)) if from > 0 && to > 0 => {
                    Input::Game(Command::reorder(from - 1, to - 1))
                }
                _ => unknown(),
            },
            _ => unknown(),
        },
        "unlock" => match rest {
            [direction, "with", key @ ..] | [direction, key @ ..] => {
                match (direction.parse::<Direction>(), item_id(key)) {
                    (Ok(direction), Some(key)) => Input::Game(Command::unlock(direction, key)),
                    _ => unknown(),
                }
            }
            _ => unknown(),
        },
        _ => unknown(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_and_aliases() {
        assert_eq!(parse("n"), Input::Game(Command::move_to(Direction::North)));
        assert_eq!(
            parse("go West"),
            Input::Game(Command::move_to(Direction::West))
        );
        assert_eq!(parse("go nowhere"), Input::Unknown("go nowhere".into()));
    }

    #[test]
    fn item_names_become_ids() {
        assert_eq!(
            parse("take Rusty Dagger"),
            Input::Game(Command::take("rusty-dagger"))
        );
        assert_eq!(parse("take"), Input::Unknown("take".into()));
    }

    #[test]
    fn unlock_accepts_optional_with() {
        let expected = Input::Game(Command::unlock(Direction::North, "iron-key"));
        assert_eq!(parse("unlock north with iron key"), expected);
        assert_eq!(parse("unlock n iron-key"), expected);
    }

    #[test]
    fn combat_and_inventory_verbs() {
        assert_eq!(parse("parry"), Input::Game(Command::combat(PlayerAction::Parry)));
        assert_eq!(parse("fight"), Input::Game(Command::start_combat()));
        assert_eq!(parse("swap 1 3"), Input::Game(Command::reorder(0, 2)));
        assert_eq!(parse("swap 0 1"), Input::Unknown("swap 0 1".into()));
        assert_eq!(
            parse("unequip armor"),
            Input::Game(Command::unequip(EquipSlot::Armor))
        );
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse("   "), Input::Empty);
    }
}
