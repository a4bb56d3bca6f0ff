//! Walking cause chains
//!
//! A chain is followed one link at a time. Each link is probed for the
//! legacy [`Causer`](crate::Causer) accessor first and for the native
//! [`source`](std::error::Error::source) second:
//!
//! - [`cause`] follows only the legacy accessor and returns the first link
//!   that lacks one, or that reports no further cause.
//! - [`unwrap`] takes a single step with whichever accessor the link has.
//! - [`is`] and [`find`] test every link reached through [`unwrap`].
//!
//! Chains are assumed acyclic; nothing here guards against a link that
//! eventually wraps itself.

use crate::causer::legacy_cause;
use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Follow the legacy cause accessor as far as it goes.
///
/// Returns `err` itself when it exposes no legacy accessor. Errors that only
/// implement [`source`](StdError::source) are not looked through.
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(Some(next)) = legacy_cause(current) {
        current = next;
    }
    current
}

/// The link directly beneath `err`, if any.
///
/// Prefers the legacy accessor and falls back to
/// [`source`](StdError::source).
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match legacy_cause(err) {
        Some(next) => next,
        None => err.source(),
    }
}

/// Whether any link of the chain equals `target`.
///
/// Only links whose concrete type is `T` are compared. This crate's
/// [`Error`](crate::Error) compares by identity, so a clone of the very
/// error that was wrapped is found but an equal-looking new one is not.
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    Chain::new(err).any(|link| link.downcast_ref::<T>().is_some_and(|found| found == target))
}

/// The first link whose concrete type is `T`.
pub fn find<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    Chain::new(err).find_map(|link| link.downcast_ref::<T>())
}

/// Copy the first link of type `T` into `target`.
///
/// Returns `false` and leaves `target` alone if no link matches.
pub fn find_into<T>(err: &(dyn StdError + 'static), target: &mut T) -> bool
where
    T: StdError + Clone + 'static,
{
    match find::<T>(err) {
        Some(found) => {
            target.clone_from(found);
            true
        }
        None => false,
    }
}

/// Iterator over a chain, starting with the error it was created from.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a walk at `err`.
    pub fn new(err: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = unwrap(current);
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
