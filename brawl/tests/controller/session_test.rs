use assert_matches::assert_matches;
use brawl::{
    BattleController,
    BattleEngineOptions,
    BattleOutcome,
    BattleSettings,
    Creature,
    EmptyPoolUnderflowError,
    Side,
};
use brawl_test_utils::{
    RecordingDisplay,
    ScriptedInput,
    TestBattleBuilder,
    assert_error_message_contains,
    creature,
    setup_test_environment,
};
use pretty_assertions::assert_eq;

fn one_on_one_roster() -> Vec<Creature> {
    vec![
        creature("Lion", 10, &[("Bite", 10)]),
        creature("Eagle", 10, &[("Peck", 10)]),
    ]
}

fn options(seed: u64) -> BattleEngineOptions {
    BattleEngineOptions {
        seed: Some(seed),
        ..Default::default()
    }
}

fn settings(pick_limit: usize, difficulty: u8) -> BattleSettings {
    BattleSettings::new(pick_limit, difficulty).unwrap()
}

#[test]
fn plays_draft_and_battle_to_victory() {
    setup_test_environment();
    let roster = one_on_one_roster();
    let mut input = ScriptedInput::new(["9", "abc", "1", "1", "1"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller =
            BattleController::new(settings(1, 5), options(0), &mut input, &mut display);
        controller.run(&roster)
    };

    assert_matches!(outcome, Ok(BattleOutcome::Victory { winner: Side::Player }));
    assert_eq!(input.rejected(), ["9", "abc"]);
    assert_eq!(input.remaining(), 0);
    assert_eq!(
        display.lines(),
        vec![
            "draftpick|side:player|creature:Lion",
            "draftpick|side:computer|creature:Eagle",
            "turn|turn:1|player:Lion,10/10|computer:Eagle,10/10",
            "attack|side:player|creature:Lion|attack:Bite|damage:10",
            "faint|side:computer|creature:Eagle",
            "win|side:player",
        ]
    );
}

#[test]
fn backs_out_of_submenus_and_forfeits() {
    let roster = one_on_one_roster();
    let mut input = ScriptedInput::new(["1", "1", "0", "2", "0", "3"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller =
            BattleController::new(settings(1, 5), options(0), &mut input, &mut display);
        controller.run(&roster)
    };

    assert_matches!(
        outcome,
        Ok(BattleOutcome::Forfeit {
            forfeiter: Side::Player
        })
    );
    let prompts = input.prompts();
    assert_eq!(prompts.len(), 6);
    assert_eq!(prompts[2].message, "Choose an attack");
    assert_eq!(
        prompts[2].valid_tokens().collect::<Vec<_>>(),
        vec!["1", "0"]
    );
    assert_eq!(prompts[4].message, "No other creature can fight");
    assert_eq!(prompts[4].valid_tokens().collect::<Vec<_>>(), vec!["0"]);
    assert_eq!(
        display.lines(),
        vec![
            "draftpick|side:player|creature:Lion",
            "draftpick|side:computer|creature:Eagle",
            "turn|turn:1|player:Lion,10/10|computer:Eagle,10/10",
            "win|side:computer|forfeit:player",
        ]
    );
}

#[test]
fn small_pool_fails_before_prompting() {
    let roster = vec![creature("Lion", 10, &[("Bite", 10)])];
    let mut input = ScriptedInput::new(["1"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller =
            BattleController::new(settings(1, 2), options(0), &mut input, &mut display);
        controller.run(&roster)
    };

    assert_matches!(outcome, Err(err) => {
        assert_matches!(err.downcast_ref::<EmptyPoolUnderflowError>(), Some(err) => {
            assert_eq!(err.available, 1);
            assert_eq!(err.required, 2);
        });
    });
    assert!(input.prompts().is_empty());
    assert!(display.events().is_empty());
}

#[test]
fn exhausted_input_stops_session() {
    let roster = one_on_one_roster();
    let mut input = ScriptedInput::new(["1", "1"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller =
            BattleController::new(settings(1, 5), options(0), &mut input, &mut display);
        controller.run(&roster)
    };

    assert_error_message_contains(outcome, "input script ran out at prompt \"Choose an attack\"");
}

#[test]
fn prompts_for_replacement_after_faint() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 5, &[("Hit", 1)]),
            creature("C", 10, &[("Hit", 10)]),
        ])
        .with_computer_squad(vec![creature("B", 10, &[("Smash", 5)])])
        .build()
        .unwrap();
    let mut input = ScriptedInput::new(["1", "1", "1", "2", "1", "1"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller = BattleController::new(
            BattleSettings::default(),
            options(0),
            &mut input,
            &mut display,
        );
        controller.run_battle(&mut battle)
    };

    assert_matches!(outcome, Ok(BattleOutcome::Victory { winner: Side::Player }));
    assert_eq!(input.rejected(), ["1"]);
    let replacement = &input.prompts()[2];
    assert_eq!(replacement.message, "A fainted! Choose a replacement");
    assert_eq!(replacement.options.len(), 1);
    assert_eq!(replacement.options[0].token, "2");
    assert_eq!(replacement.options[0].label, "C (10/10 HP, Alive)");
    assert_eq!(
        display.lines(),
        vec![
            "turn|turn:1|player:A,5/5|computer:B,10/10",
            "attack|side:player|creature:A|attack:Hit|damage:1",
            "attack|side:computer|creature:B|attack:Smash|damage:5",
            "faint|side:player|creature:A",
            "swap|side:player|creature:C|forced",
            "turn|turn:2|player:C,10/10|computer:B,9/10",
            "attack|side:player|creature:C|attack:Hit|damage:10",
            "faint|side:computer|creature:B",
            "win|side:player",
        ]
    );
}

#[test]
fn swaps_through_menu() {
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_difficulty(5)
        .with_player_squad(vec![
            creature("A", 10, &[("Hit", 1)]),
            creature("C", 10, &[("Hit", 1)]),
        ])
        .with_computer_squad(vec![creature("B", 100, &[("Smash", 5)])])
        .build()
        .unwrap();
    let mut input = ScriptedInput::new(["2", "1", "2", "3"]);
    let mut display = RecordingDisplay::new();

    let outcome = {
        let mut controller = BattleController::new(
            BattleSettings::default(),
            options(0),
            &mut input,
            &mut display,
        );
        controller.run_battle(&mut battle)
    };

    assert_matches!(outcome, Ok(BattleOutcome::Forfeit { .. }));
    // The active creature is never offered as a swap target.
    assert_eq!(input.rejected(), ["1"]);
    assert_eq!(battle.player_squad().active().name, "C");
    assert_eq!(
        display.lines()[1..3],
        [
            "swap|side:player|creature:C",
            "attack|side:computer|creature:B|attack:Smash|damage:5",
        ]
    );
}
