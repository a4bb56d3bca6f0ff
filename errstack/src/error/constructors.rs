//! Error constructors and methods

use super::types::{Cause, Error, ErrorInner, LinkKind};
use crate::chain::{self, Chain};
use crate::config;
use crate::stack::StackTrace;
use std::error::Error as StdError;
use std::sync::Arc;

/// Capture the stack starting `skip` frames above the caller.
///
/// Every public factory calls this directly with `skip == 1` so the trace
/// starts in the factory's caller, never inside this crate.
#[inline(never)]
pub(crate) fn capture_above(skip: usize) -> StackTrace {
    let config = config::current();
    if !config.capture {
        return StackTrace::empty();
    }
    StackTrace::capture(skip + 1, config.max_depth)
}

impl Error {
    pub(crate) fn leaf(message: String, stack: StackTrace) -> Self {
        Self::from_inner(ErrorInner::Leaf { message, stack })
    }

    pub(crate) fn stacked(cause: Cause, stack: StackTrace) -> Self {
        Self::from_inner(ErrorInner::Stack { cause, stack })
    }

    pub(crate) fn annotated(cause: Cause, message: String) -> Self {
        Self::from_inner(ErrorInner::Message { cause, message })
    }

    /// Wrap with a stack layer, then a message layer on top of it.
    pub(crate) fn wrapped(cause: Cause, message: String, stack: StackTrace) -> Self {
        Self::annotated(Box::new(Self::stacked(cause, stack)), message)
    }

    fn from_inner(inner: ErrorInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Create a leaf error recording the caller's stack.
    #[inline(never)]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::leaf(message.into(), capture_above(1))
    }

    /// Annotate `err` with `message` and the caller's stack.
    ///
    /// Produces a message layer over a stack layer over `err`.
    #[inline(never)]
    #[must_use]
    pub fn wrap<E>(err: E, message: impl Into<String>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrapped(Box::new(err), message.into(), capture_above(1))
    }

    /// Record the caller's stack on `err` without changing its message.
    #[inline(never)]
    #[must_use]
    pub fn with_stack<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::stacked(Box::new(err), capture_above(1))
    }

    /// Prefix `err`'s message with `message`. No stack is captured.
    #[must_use]
    pub fn with_message<E>(err: E, message: impl Into<String>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::annotated(Box::new(err), message.into())
    }

    /// Which kind of link this is
    pub fn kind(&self) -> LinkKind {
        match &*self.inner {
            ErrorInner::Leaf { .. } => LinkKind::Leaf,
            ErrorInner::Stack { .. } => LinkKind::Stack,
            ErrorInner::Message { .. } => LinkKind::Message,
        }
    }

    /// The full message of the chain starting at this link.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The error this link wraps, if any
    pub fn next(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.inner {
            ErrorInner::Leaf { .. } => None,
            ErrorInner::Stack { cause, .. } | ErrorInner::Message { cause, .. } => {
                Some(cause.as_ref())
            }
        }
    }

    /// The stack recorded by this link itself, if it records one.
    pub fn own_stack(&self) -> Option<&StackTrace> {
        match &*self.inner {
            ErrorInner::Leaf { stack, .. } | ErrorInner::Stack { stack, .. } => Some(stack),
            ErrorInner::Message { .. } => None,
        }
    }

    /// The nearest stack walking inward from this link.
    ///
    /// A message wrapper records no stack, so this reports the stack of the
    /// first link beneath it that does.
    pub fn stack_trace(&self) -> Option<&StackTrace> {
        self.chain()
            .filter_map(|link| link.downcast_ref::<Self>())
            .find_map(Self::own_stack)
    }

    /// Iterate over this link and everything it wraps
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost error reachable through cause accessors.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        chain::cause(self)
    }

    /// Whether any link of this chain equals `target`.
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        chain::is(self, target)
    }

    /// The first link of type `T`, if any
    pub fn find<T: StdError + 'static>(&self) -> Option<&T> {
        chain::find(self)
    }

    /// Whether two handles refer to the same error
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}
