use assert_matches::assert_matches;
use brawl::{
    BattleOutcome,
    BattlePhase,
    ReplacementRequest,
    Request,
    Side,
    choice::Choice,
    is_recoverable,
};
use brawl_test_utils::{
    TestBattleBuilder,
    assert_error_message,
    assert_new_events_eq,
    creature,
};

#[test]
fn single_member_faint_ends_battle_without_replacement() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![creature("A", 5, &[("Hit", 1)])])
        .with_computer_squad(vec![creature("B", 10, &[("Smash", 5)])])
        .build()
        .unwrap();
    battle.log_mut().read_out().count();

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert!(!battle.player_squad().has_alive_creature());
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "attack|side:computer|creature:B|attack:Smash|damage:5",
            "faint|side:player|creature:A",
            "win|side:computer",
        ],
    );
    assert_eq!(
        battle.outcome(),
        Some(BattleOutcome::Victory {
            winner: Side::Computer
        })
    );
    assert_eq!(battle.request(), None);
}

#[test]
fn player_chooses_replacement_after_faint() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 5, &[("Hit", 1)]),
            creature("C", 10, &[("Hit", 1)]),
            creature("D", 10, &[("Hit", 1)]),
        ])
        .with_computer_squad(vec![creature("B", 10, &[("Smash", 5)])])
        .build()
        .unwrap();
    battle.log_mut().read_out().count();

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "attack|side:computer|creature:B|attack:Smash|damage:5",
            "faint|side:player|creature:A",
        ],
    );
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerReplacement);
    assert_eq!(
        battle.request(),
        Some(Request::Replacement(ReplacementRequest {
            options: vec![1, 2],
        }))
    );

    assert_matches!(battle.make_choice(Choice::attack(0)), Err(err) => {
        assert!(is_recoverable(&err));
    });
    assert_matches!(battle.make_choice(Choice::swap(0)), Err(err) => {
        assert!(is_recoverable(&err));
    });
    assert_error_message(
        battle.make_choice(Choice::swap(3)),
        "cannot replace fainted creature: invalid selection: there is no creature in slot 3",
    );
    assert_eq!(battle.turn(), 1);
    assert!(!battle.log_mut().has_new_events());

    assert_matches!(battle.make_choice(Choice::swap(2)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "swap|side:player|creature:D|forced",
            "turn|turn:2|player:D,10/10|computer:B,9/10",
        ],
    );
    assert_eq!(battle.player_squad().active_index(), 2);
}

#[test]
fn last_living_member_fainting_ends_battle() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 5, &[("Hit", 1)]),
            creature("C", 5, &[("Hit", 1)]),
        ])
        .with_computer_squad(vec![creature("B", 10, &[("Smash", 5)])])
        .build()
        .unwrap();

    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_matches!(battle.make_choice(Choice::swap(1)), Ok(()));
    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_eq!(
        battle.outcome(),
        Some(BattleOutcome::Victory {
            winner: Side::Computer
        })
    );
    assert_eq!(battle.computer_squad().active().hp(), 8);
}
