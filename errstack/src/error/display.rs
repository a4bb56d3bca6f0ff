//! Display and trait implementations for Error

use super::types::{Error, ErrorInner};
use crate::causer::Causer;
use crate::render::{display_verb, Render, Verb};
use std::error::Error as StdError;
use std::fmt;

impl Error {
    /// Chain text followed by every stack recorded along the way, innermost
    /// link first.
    fn write_extended(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner {
            ErrorInner::Leaf { message, stack } => {
                f.write_str(message)?;
                stack.render_into(f, Verb::Extended)
            }
            ErrorInner::Stack { cause, stack } => {
                write_cause_extended(f, cause.as_ref())?;
                stack.render_into(f, Verb::Extended)
            }
            ErrorInner::Message { cause, message } => {
                write_cause_extended(f, cause.as_ref())?;
                write!(f, "\n{message}")
            }
        }
    }
}

fn write_cause_extended(
    f: &mut fmt::Formatter<'_>,
    cause: &(dyn StdError + 'static),
) -> fmt::Result {
    match cause.downcast_ref::<Error>() {
        Some(err) => err.write_extended(f),
        None => write!(f, "{cause:#}"),
    }
}

impl Render for Error {
    fn render_into(&self, f: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
        match verb {
            Verb::Extended => self.write_extended(f),
            Verb::Line => {
                let line = self
                    .stack_trace()
                    .and_then(|stack| stack.first())
                    .map_or(0, |frame| frame.line());
                write!(f, "{line}")
            }
            Verb::Short | Verb::Long | Verb::Name | Verb::Default | Verb::Debug => {
                match &*self.inner {
                    ErrorInner::Leaf { message, .. } => f.write_str(message),
                    ErrorInner::Stack { cause, .. } => write!(f, "{cause}"),
                    ErrorInner::Message { cause, message } => write!(f, "{message}: {cause}"),
                }
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, display_verb(f))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_extended(f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.next()
    }
}

impl Causer for Error {
    fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.next()
    }
}
