mod event;
mod event_log;

pub use event::{
    BattleEvent,
    CreatureStatus,
};
pub use event_log::EventLog;
