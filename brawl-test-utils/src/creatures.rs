use anyhow::Result;
use brawl::{
    Attack,
    Creature,
    WrapResultError,
};

/// Creates a creature with the given attacks, in order.
pub fn creature(name: &str, max_hp: u32, attacks: &[(&str, u32)]) -> Creature {
    let attacks = attacks
        .iter()
        .map(|(name, damage)| Attack::new(*name, *damage))
        .collect();
    match Creature::new(name, "Normal", max_hp, attacks, "Fighting", None) {
        Ok(creature) => creature,
        Err(err) => panic!("invalid test creature {name}: {err:#}"),
    }
}

/// Parses creatures from roster JSON.
pub fn creatures_from_json(json: &str) -> Result<Vec<Creature>> {
    serde_json::from_str(json).wrap_error()
}
