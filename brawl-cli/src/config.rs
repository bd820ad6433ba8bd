use std::{
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Result,
};
use brawl::{
    BattleEngineOptions,
    BattleSettings,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Roster file used when neither the command line nor the config file names one.
pub const DEFAULT_ROSTER_PATH: &str = "roster.json";

/// Optional settings file for the command line.
///
/// Every field can be overridden by the corresponding flag.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub pick_limit: Option<usize>,
    pub difficulty: Option<u8>,
    pub seed: Option<u64>,
    pub roster: Option<PathBuf>,
}

impl CliConfig {
    /// Reads a config file.
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Reads a config file if one is given, otherwise uses the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The roster path, preferring the flag over the config file.
    pub fn roster_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.roster.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_PATH))
    }

    /// Battle settings, preferring flags over the config file over the defaults.
    pub fn battle_settings(
        &self,
        pick_limit: Option<usize>,
        difficulty: Option<u8>,
    ) -> Result<BattleSettings> {
        BattleSettings::new(
            pick_limit
                .or(self.pick_limit)
                .unwrap_or(BattleSettings::DEFAULT_PICK_LIMIT),
            difficulty
                .or(self.difficulty)
                .unwrap_or(BattleSettings::DEFAULT_DIFFICULTY),
        )
        .context("invalid battle settings")
    }

    pub fn engine_options(&self, seed: Option<u64>) -> BattleEngineOptions {
        BattleEngineOptions {
            seed: seed.or(self.seed),
            ..Default::default()
        }
    }
}
