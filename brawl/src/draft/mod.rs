mod draft;

pub use draft::{
    DraftPhase,
    is_valid_pick,
};
