mod opponent;
mod random;

pub use opponent::{
    OpponentContext,
    OpponentPolicy,
};
pub use random::RandomOpponent;
