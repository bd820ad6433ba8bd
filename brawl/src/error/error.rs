use std::{
    fmt::{
        self,
        Arguments,
        Debug,
        Display,
    },
    panic::Location,
};

use anyhow::Error;

use crate::error::{
    general_error,
    not_found_error,
};

/// A message layered over another error, remembering where in the source it was attached.
///
/// `Display` shows only the message, so `{err:#}` reads as "message: cause". `Debug` adds the
/// location.
struct ContextError {
    message: String,
    location: &'static Location<'static>,
}

impl ContextError {
    #[track_caller]
    fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
            location: Location::caller(),
        }
    }
}

impl Debug for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.location)
    }
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Converts a typed error into [`Error`].
pub trait WrapError {
    #[track_caller]
    fn wrap_error(self) -> Error;

    /// Converts the error and layers a message over it.
    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    fn wrap_error(self) -> Error {
        self.into()
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display,
    {
        let context = ContextError::new(message);
        Into::<Error>::into(self).context(context)
    }
}

/// [`WrapError`] lifted over the error side of a [`Result`].
pub trait WrapResultError<T> {
    #[track_caller]
    fn wrap_error(self) -> Result<T, Error>;

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Like [`WrapResultError::wrap_error_with_message`], but only formats on failure.
    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error>;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    fn wrap_error(self) -> Result<T, Error> {
        self.map_err(WrapError::wrap_error)
    }

    #[track_caller]
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.wrap_error_with_message(message)),
        }
    }

    #[track_caller]
    fn wrap_error_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_error_with_message(args)
    }
}

/// Turns a missing value into an [`Error`].
pub trait WrapOptionError<T> {
    /// Fails with a [`GeneralError`][`crate::error::GeneralError`] when the value is missing.
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    #[track_caller]
    fn wrap_expectation_with_format(self, args: Arguments<'_>) -> Result<T, Error>;

    /// Fails with a [`NotFoundError`][`crate::error::NotFoundError`] naming the missing target.
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(general_error(message)),
        }
    }

    #[track_caller]
    fn wrap_expectation_with_format(self, args: Arguments<'_>) -> Result<T, Error> {
        self.wrap_expectation(args)
    }

    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(not_found_error(target)),
        }
    }
}
