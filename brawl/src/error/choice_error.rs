use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A choice that was rejected by the battle.
///
/// Selection errors are recoverable: the battle state is untouched and the same request remains
/// open.
#[derive(Error, Debug)]
pub enum ChoiceError {
    /// An index that is out of range or does not fit the request.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
    /// A swap target that is fainted or already active.
    #[error("illegal swap target: {0}")]
    IllegalSwapTarget(String),
    /// The battle is not waiting on a choice.
    #[error("you cannot do anything: {0}")]
    NoActiveRequest(String),
}

/// Helper for an [`struct@Error`] wrapping [`ChoiceError::InvalidSelection`].
#[track_caller]
pub fn invalid_selection_error<M>(message: M) -> Error
where
    M: Display,
{
    ChoiceError::InvalidSelection(message.to_string()).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping [`ChoiceError::IllegalSwapTarget`].
#[track_caller]
pub fn illegal_swap_target_error<M>(message: M) -> Error
where
    M: Display,
{
    ChoiceError::IllegalSwapTarget(message.to_string()).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping [`ChoiceError::NoActiveRequest`].
#[track_caller]
pub fn no_active_request_error<M>(reason: M) -> Error
where
    M: Display,
{
    ChoiceError::NoActiveRequest(reason.to_string()).wrap_error()
}

/// Checks if the error can be recovered from by asking for a new choice.
pub fn is_recoverable(error: &Error) -> bool {
    matches!(
        error.downcast_ref::<ChoiceError>(),
        Some(ChoiceError::InvalidSelection(_) | ChoiceError::IllegalSwapTarget(_))
    )
}
