use anyhow::Result;
use assert_matches::assert_matches;
use brawl::{
    BattleEngine,
    BattleOutcome,
    BattlePhase,
    OpponentContext,
    OpponentPolicy,
    Side,
    choice::Choice,
    rng::PseudoRandomNumberGenerator,
};
use brawl_test_utils::{
    TestBattleBuilder,
    assert_error_message,
    assert_new_events_eq,
    creature,
    get_controlled_rng_for_battle,
};

struct FixedOpponent(Choice);

impl OpponentPolicy for FixedOpponent {
    fn make_choice(
        &mut self,
        _: OpponentContext<'_>,
        _: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Choice> {
        Ok(self.0)
    }
}

fn make_battle(difficulty: u8) -> BattleEngine {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(difficulty)
        .with_controlled_rng(true)
        .with_player_squad(vec![creature("A", 100, &[("Hit", 1)])])
        .with_computer_squad(vec![
            creature("B", 10, &[("Peck", 2)]),
            creature("C", 10, &[("Claw", 3), ("Bite", 4)]),
        ])
        .build()
        .unwrap()
}

#[test]
fn computer_swaps_when_attack_roll_fails() {
    let mut battle = make_battle(1);
    battle.log_mut().read_out().count();

    // Attack chance is 6 in 10, so a roll of 9 fails.
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_values_relative_to_sequence_count([(1, 9)]);

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "swap|side:computer|creature:C",
            "turn|turn:2|player:A,100/100|computer:C,10/10",
        ],
    );
}

#[test]
fn computer_attacks_when_attack_roll_succeeds() {
    let mut battle = make_battle(1);
    battle.log_mut().read_out().count();

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_values_relative_to_sequence_count([(1, 5), (2, 0)]);

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "attack|side:computer|creature:B|attack:Peck|damage:2",
            "turn|turn:2|player:A,98/100|computer:B,9/10",
        ],
    );
}

#[test]
fn computer_attack_drawn_from_active_attacks() {
    let mut battle = make_battle(5);
    battle.log_mut().read_out().count();

    // Swap the computer to C by fainting B, then pick C's second attack.
    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0)]);
    for _ in 0..9 {
        assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    }
    battle.log_mut().read_out().count();

    let rng = get_controlled_rng_for_battle(&mut battle).unwrap();
    rng.insert_fake_values_relative_to_sequence_count([(1, 0), (2, 1)]);
    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "faint|side:computer|creature:B",
            "swap|side:computer|creature:C|forced",
            "attack|side:computer|creature:C|attack:Bite|damage:4",
            "turn|turn:11|player:A,78/100|computer:C,10/10",
        ],
    );
}

#[test]
fn max_difficulty_always_attacks_in_battle() {
    let mut battle = make_battle(5);
    for _ in 0..9 {
        assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    }
    assert!(
        battle
            .log_mut()
            .events()
            .all(|event| !event.to_string().starts_with("swap|side:computer"))
    );
}

#[test]
fn opponent_forfeit_ends_battle() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_policy(Box::new(FixedOpponent(Choice::Forfeit)))
        .with_player_squad(vec![creature("A", 10, &[("Hit", 1)])])
        .with_computer_squad(vec![creature("B", 10, &[("Hit", 1)])])
        .build()
        .unwrap();
    battle.log_mut().read_out().count();

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "win|side:player|forfeit:computer",
        ],
    );
    assert_eq!(
        battle.outcome(),
        Some(BattleOutcome::Forfeit {
            forfeiter: Side::Computer
        })
    );
}

#[test]
fn illegal_opponent_choice_is_fatal() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_policy(Box::new(FixedOpponent(Choice::attack(3))))
        .with_player_squad(vec![creature("A", 10, &[("Hit", 1)])])
        .with_computer_squad(vec![creature("B", 10, &[("Hit", 1)])])
        .build()
        .unwrap();

    assert_error_message(
        battle.make_choice(Choice::attack(0)),
        "opponent made an illegal choice: attack 3: invalid selection: B does not have an attack in slot 3",
    );
    assert_eq!(battle.phase(), BattlePhase::AwaitingComputerAction);
}
