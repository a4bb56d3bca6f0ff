//! Core error types and definitions

use crate::stack::StackTrace;
use std::error::Error as StdError;
use std::sync::Arc;

/// The next link of a chain: any error, this crate's own included
pub(crate) type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// An annotated error.
///
/// Every value is one link of a cause chain: a leaf carrying a message and
/// the stack it was created on, a stack wrapper that records where an
/// existing error passed through, or a message wrapper that prefixes
/// context. Cloning is cheap and clones compare equal; two independently
/// created errors never do, even with identical text.
#[derive(Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

pub(super) enum ErrorInner {
    Leaf {
        message: String,
        stack: StackTrace,
    },
    Stack {
        cause: Cause,
        stack: StackTrace,
    },
    Message {
        cause: Cause,
        message: String,
    },
}

/// Which kind of link an [`Error`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Owns a message and a stack; ends the chain
    Leaf,
    /// Adds a stack to the error it wraps
    Stack,
    /// Adds a message to the error it wraps
    Message,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
