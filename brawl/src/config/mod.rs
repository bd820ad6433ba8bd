mod engine_options;
mod settings;

pub use engine_options::BattleEngineOptions;
pub use settings::BattleSettings;
