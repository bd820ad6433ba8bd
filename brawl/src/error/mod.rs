mod brawl_error;
mod choice_error;
mod error;
mod validation_error;

pub use brawl_error::{
    EmptyPoolUnderflowError,
    GeneralError,
    NotFoundError,
    empty_pool_underflow_error,
    general_error,
    not_found_error,
};
pub use choice_error::{
    ChoiceError,
    illegal_swap_target_error,
    invalid_selection_error,
    is_recoverable,
    no_active_request_error,
};
pub use error::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
pub use validation_error::ValidationError;
