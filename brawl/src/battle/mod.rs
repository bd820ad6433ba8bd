mod controller;
mod engine;
mod io;
mod outcome;
mod request;
mod side;
mod squad;

pub use controller::BattleController;
pub use engine::BattleEngine;
pub use io::{
    Display,
    InputSource,
    Prompt,
    PromptOption,
};
pub use outcome::{
    BattleOutcome,
    BattlePhase,
};
pub use request::{
    ActionRequest,
    ReplacementRequest,
    Request,
};
pub use side::Side;
pub use squad::Squad;
