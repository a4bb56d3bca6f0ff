//! Annotation helpers on `Result`
//!
//! `Ok` values pass through untouched, so annotating "no error" is always a
//! no-op and never captures a stack.

use super::constructors::capture_above;
use super::types::Error;
use std::error::Error as StdError;

/// Annotate the error side of a `Result`.
pub trait ResultExt<T> {
    /// Add `message` and the caller's stack to the error.
    fn wrap(self, message: impl Into<String>) -> Result<T, Error>;

    /// Like [`wrap`](ResultExt::wrap), building the message only on error.
    fn wrap_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Record the caller's stack on the error.
    fn with_stack(self) -> Result<T, Error>;

    /// Prefix the error's message with `message`.
    fn with_message(self, message: impl Into<String>) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    #[inline(never)]
    fn wrap(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrapped(
                Box::new(err),
                message.into(),
                capture_above(1),
            )),
        }
    }

    #[inline(never)]
    fn wrap_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::wrapped(
                Box::new(err),
                message().into(),
                capture_above(1),
            )),
        }
    }

    #[inline(never)]
    fn with_stack(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::stacked(Box::new(err), capture_above(1))),
        }
    }

    fn with_message(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::annotated(Box::new(err), message.into())),
        }
    }
}
