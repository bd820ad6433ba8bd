mod creature;

pub use creature::{
    Attack,
    Creature,
};
