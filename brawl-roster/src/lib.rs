mod creature_update;
mod local;

pub use creature_update::CreatureUpdate;
pub use local::LocalRosterStore;
