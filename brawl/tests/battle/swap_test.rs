use assert_matches::assert_matches;
use brawl::{
    ActionRequest,
    Attack,
    BattleEngine,
    BattlePhase,
    Request,
    choice::Choice,
    is_recoverable,
};
use brawl_test_utils::{
    TestBattleBuilder,
    assert_error_message,
    assert_new_events_eq,
    creature,
};

fn make_battle() -> BattleEngine {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 10, &[("Hit", 1)]),
            creature("C", 1, &[("Hit", 1)]),
            creature("D", 10, &[("Hit", 1), ("Kick", 2)]),
        ])
        .with_computer_squad(vec![creature("B", 100, &[("Smash", 1)])])
        .build()
        .unwrap()
}

#[test]
fn swap_consumes_turn() {
    let mut battle = make_battle();
    battle.log_mut().read_out().count();

    assert_matches!(battle.make_choice(Choice::swap(2)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "swap|side:player|creature:D",
            "attack|side:computer|creature:B|attack:Smash|damage:1",
            "turn|turn:2|player:D,9/10|computer:B,100/100",
        ],
    );
    assert_eq!(battle.player_squad().member(0).map(|a| a.hp()), Some(10));
    assert_eq!(
        battle.request(),
        Some(Request::Action(ActionRequest {
            attacks: vec![Attack::new("Hit", 1), Attack::new("Kick", 2)],
            swap_options: vec![0, 1],
        }))
    );
}

#[test]
fn rejects_swap_to_active_member() {
    let mut battle = make_battle();
    battle.log_mut().read_out().count();
    assert_error_message(
        battle.make_choice(Choice::swap(0)),
        "cannot swap: illegal swap target: A is already active",
    );
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerAction);
    assert_eq!(battle.turn(), 1);
    assert!(!battle.log_mut().has_new_events());
}

#[test]
fn rejects_swap_out_of_range() {
    let mut battle = make_battle();
    assert_matches!(battle.make_choice(Choice::swap(3)), Err(err) => {
        assert!(is_recoverable(&err));
    });
    assert_eq!(battle.player_squad().active_index(), 0);
}

#[test]
fn rejects_swap_to_fainted_member() {
    let mut battle = make_battle();
    battle.log_mut().read_out().count();

    // C faints to the computer's attack and is replaced by A.
    assert_matches!(battle.make_choice(Choice::swap(1)), Ok(()));
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerReplacement);
    assert_matches!(battle.make_choice(Choice::swap(0)), Ok(()));
    assert_new_events_eq(
        battle.log_mut(),
        &[
            "swap|side:player|creature:C",
            "attack|side:computer|creature:B|attack:Smash|damage:1",
            "faint|side:player|creature:C",
            "swap|side:player|creature:A|forced",
            "turn|turn:2|player:A,10/10|computer:B,100/100",
        ],
    );

    assert_error_message(
        battle.make_choice(Choice::swap(1)),
        "cannot swap: illegal swap target: C has fainted",
    );
    assert_matches!(battle.request(), Some(Request::Action(request)) => {
        assert_eq!(request.swap_options, vec![2]);
    });
}
