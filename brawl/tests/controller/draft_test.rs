use std::collections::BTreeSet;

use brawl::{
    BattleController,
    BattleEngineOptions,
    BattleSettings,
    Creature,
    DraftPhase,
    rng::RealPseudoRandomNumberGenerator,
};
use brawl_test_utils::{
    RecordingDisplay,
    ScriptedInput,
    creature,
    creatures_from_json,
};
use pretty_assertions::assert_eq;

fn roster() -> Vec<Creature> {
    ["Lion", "Eagle", "Bear", "Shark", "Wolf", "Cobra", "Hawk"]
        .into_iter()
        .map(|name| creature(name, 50, &[("Strike", 10)]))
        .collect()
}

fn run_draft(seed: u64, tokens: &[&str]) -> (DraftPhase, RecordingDisplay) {
    let mut draft = DraftPhase::new(roster(), 3).unwrap();
    let mut prng = RealPseudoRandomNumberGenerator::new(Some(seed));
    let mut input = ScriptedInput::new(tokens.iter().copied());
    let mut display = RecordingDisplay::new();
    {
        let mut controller = BattleController::new(
            BattleSettings::default(),
            BattleEngineOptions::default(),
            &mut input,
            &mut display,
        );
        controller.run_draft(&mut draft, &mut prng).unwrap();
    }
    (draft, display)
}

fn names(creatures: &[Creature]) -> Vec<&str> {
    creatures.iter().map(|creature| creature.name.as_str()).collect()
}

#[test]
fn partitions_pool_between_sides() {
    let (draft, display) = run_draft(7, &["1", "1", "1"]);

    assert_eq!(draft.player_picks().len(), 3);
    assert_eq!(draft.computer_picks().len(), 3);
    assert_eq!(draft.pool_size(), 1);

    let mut all = BTreeSet::new();
    all.extend(names(draft.player_picks()));
    all.extend(names(draft.computer_picks()));
    all.extend(draft.pool_names());
    assert_eq!(all.len(), 7);

    let sides = display
        .lines()
        .iter()
        .map(|line| line.split('|').nth(1).unwrap_or_default().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        sides,
        vec![
            "side:player",
            "side:computer",
            "side:player",
            "side:computer",
            "side:player",
            "side:computer",
        ]
    );
}

#[test]
fn player_takes_presented_position() {
    let (draft, _) = run_draft(7, &["7", "1", "1"]);
    assert_eq!(draft.player_picks()[0].name, "Hawk");
}

#[test]
fn same_seed_drafts_same_computer_squad() {
    let (first, _) = run_draft(42, &["2", "2", "2"]);
    let (second, _) = run_draft(42, &["2", "2", "2"]);
    assert_eq!(names(first.computer_picks()), names(second.computer_picks()));
    assert_eq!(names(first.player_picks()), names(second.player_picks()));
}

#[test]
fn drafts_from_roster_json() {
    let creatures = creatures_from_json(
        r#"[
            { "name": "Lion", "type": "Beast", "HP": 100, "attacks": { "Bite": 20, "Roar": 10 }, "weakness": "Fire" },
            { "name": "Eagle", "type": "Flying", "HP": 80, "attacks": { "Talon Strike": 15 }, "weakness": "Electric", "resistance": "Ground" }
        ]"#,
    )
    .unwrap();
    let mut draft = DraftPhase::new(creatures, 1).unwrap();
    let mut prng = RealPseudoRandomNumberGenerator::new(Some(0));
    draft.pick_round(1, &mut prng).unwrap();
    assert_eq!(names(draft.player_picks()), vec!["Eagle"]);
    assert_eq!(names(draft.computer_picks()), vec!["Lion"]);

    let (player, computer) = draft.into_squads().unwrap();
    assert_eq!(player.active().attacks().len(), 1);
    assert_eq!(computer.active().hp(), 100);
}
