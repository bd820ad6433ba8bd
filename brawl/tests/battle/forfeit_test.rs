use assert_matches::assert_matches;
use brawl::{
    BattleOutcome,
    BattlePhase,
    Side,
    choice::Choice,
};
use brawl_test_utils::{
    TestBattleBuilder,
    assert_events_eq,
    creature,
};

#[test]
fn forfeit_ends_battle_before_computer_acts() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![creature("A", 10, &[("Hit", 5)])])
        .with_computer_squad(vec![creature("B", 10, &[("Hit", 6)])])
        .build()
        .unwrap();

    assert_matches!(battle.make_choice(Choice::Forfeit), Ok(()));
    assert_eq!(
        battle.phase(),
        BattlePhase::Terminal(BattleOutcome::Forfeit {
            forfeiter: Side::Player
        })
    );
    assert_eq!(battle.outcome().map(|outcome| outcome.winner()), Some(Side::Computer));
    assert_eq!(battle.player_squad().active().hp(), 10);
    assert_eq!(battle.computer_squad().active().hp(), 10);
    assert_events_eq(
        battle.log_mut(),
        &[
            "turn|turn:1|player:A,10/10|computer:B,10/10",
            "win|side:computer|forfeit:player",
        ],
    );
}

#[test]
fn forfeit_is_not_a_replacement() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 1, &[("Hit", 1)]),
            creature("C", 10, &[("Hit", 1)]),
        ])
        .with_computer_squad(vec![creature("B", 10, &[("Hit", 6)])])
        .build()
        .unwrap();
    assert_matches!(battle.make_choice(Choice::attack(0)), Ok(()));
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerReplacement);
    assert_matches!(battle.make_choice(Choice::Forfeit), Err(_));
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerReplacement);
}
