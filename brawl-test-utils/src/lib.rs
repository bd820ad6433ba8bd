mod creatures;
mod error_assert;
mod event_assert;
mod io;
mod rng;
mod setup;
mod test_battle_builder;

pub use creatures::{
    creature,
    creatures_from_json,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use event_assert::{
    assert_events_eq,
    assert_new_events_eq,
};
pub use io::{
    RecordingDisplay,
    ScriptedInput,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::TestBattleBuilder;
