//! Property tests: item conservation, stat consistency and clamping.

mod common;

use common::{FLOOR_ITEMS, Fixture, run, state_in};
use crawl_core::action::UnequipItemAction;
use crawl_core::{Command, EquipRef, EquipSlot, GameState, PcgRng, PlayerAction, compute_stats};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Take(usize),
    Drop(usize),
    Equip(usize),
    Unequip(EquipSlot, Option<usize>),
    Reorder(usize, usize),
}

// ── Strategy helpers ──────────────────────────────────

fn arb_slot() -> impl Strategy<Value = EquipSlot> {
    prop_oneof![Just(EquipSlot::Weapon), Just(EquipSlot::Armor)]
}

fn arb_op() -> impl Strategy<Value = Op> {
    let item = 0..FLOOR_ITEMS.len();
    prop_oneof![
        item.clone().prop_map(Op::Take),
        item.clone().prop_map(Op::Drop),
        item.prop_map(Op::Equip),
        (arb_slot(), proptest::option::of(0usize..4)).prop_map(|(slot, to)| Op::Unequip(slot, to)),
        (0usize..5, 0usize..5).prop_map(|(from, to)| Op::Reorder(from, to)),
    ]
}

fn arb_player_action() -> impl Strategy<Value = PlayerAction> {
    prop_oneof![
        Just(PlayerAction::Attack),
        Just(PlayerAction::Block),
        Just(PlayerAction::Parry),
        Just(PlayerAction::Riposte),
    ]
}

fn command(op: &Op) -> Command {
    match *op {
        Op::Take(i) => Command::take(FLOOR_ITEMS[i]),
        Op::Drop(i) => Command::drop_item(FLOOR_ITEMS[i]),
        Op::Equip(i) => Command::equip(FLOOR_ITEMS[i]),
        Op::Unequip(slot, to) => {
            let mut action = UnequipItemAction::new(EquipRef::Slot(slot));
            if let Some(to) = to {
                action = action.to_slot(to);
            }
            Command::UnequipItem(action)
        }
        Op::Reorder(from, to) => Command::reorder(from, to),
    }
}

fn enemy_hp(state: &GameState) -> Option<(u32, u32)> {
    let enemy = state.current_room()?.enemy.as_ref()?;
    Some((enemy.hp, enemy.max_hp))
}

// ── Inventory properties ──────────────────────────────

proptest! {
    #[test]
    fn prop_items_are_conserved(ops in prop::collection::vec(arb_op(), 1..60)) {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = state_in(&env, "gate");
        let initial = state.item_instances();

        for op in &ops {
            let _ = run(&mut state, env, command(op));
            prop_assert_eq!(state.item_instances(), initial.clone(), "after {:?}", op);
            prop_assert_eq!(state.inventory.capacity(), 4);
        }
    }

    #[test]
    fn prop_stats_never_stale(ops in prop::collection::vec(arb_op(), 1..60)) {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = state_in(&env, "gate");

        for op in &ops {
            let _ = run(&mut state, env, command(op));
            let stats = compute_stats(&state.equipped, env.items(), env.config());
            prop_assert_eq!(state.attack, stats.attack, "after {:?}", op);
            prop_assert_eq!(state.defense, stats.defense, "after {:?}", op);
        }
    }
}

// ── Combat properties ─────────────────────────────────

proptest! {
    #[test]
    fn prop_health_is_clamped(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_player_action(), 1..40),
    ) {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);
        let mut state = state_in(&env, "hall");
        state.game_seed = seed;
        run(&mut state, env, Command::start_combat()).unwrap();

        for action in actions {
            let _ = run(&mut state, env, Command::combat(action));
            prop_assert!(state.health <= state.max_health);
            if let Some((hp, max_hp)) = enemy_hp(&state) {
                prop_assert!(hp <= max_hp);
                prop_assert!(hp > 0 || state.combat.is_none());
            }
            if state.combat.as_ref().is_some_and(|combat| combat.is_processing) {
                run(&mut state, env, Command::end_round()).unwrap();
            }
            if state.combat.is_none() {
                break;
            }
        }
    }

    #[test]
    fn prop_same_seed_same_fight(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_player_action(), 1..20),
    ) {
        let fixture = Fixture::new();
        let rng = PcgRng;
        let env = fixture.env(&rng);

        let play = || {
            let mut state = state_in(&env, "hall");
            state.game_seed = seed;
            let _ = run(&mut state, env, Command::start_combat());
            for action in &actions {
                let _ = run(&mut state, env, Command::combat(*action));
                let _ = run(&mut state, env, Command::end_round());
            }
            state
        };

        prop_assert_eq!(play(), play());
    }
}
