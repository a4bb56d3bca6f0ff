//! The legacy cause accessor
//!
//! Older error types expose the error they wrap through a dedicated `cause`
//! accessor rather than [`std::error::Error::source`]. [`Causer`] models that
//! accessor. Trait objects cannot be asked at runtime whether they implement
//! a trait, so foreign types opt in with [`register`]; this crate's own
//! [`Error`](crate::Error) is always recognised.

use crate::error::Error;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::{type_name, TypeId};
use std::error::Error as StdError;

/// An error that names the error it directly wraps.
pub trait Causer {
    /// The wrapped error, or `None` if this error ends the chain.
    fn cause(&self) -> Option<&(dyn StdError + 'static)>;
}

/// Outer `None`: the error has no legacy accessor. Inner `None`: it has one
/// and reports no further cause.
type Probe = for<'a> fn(&'a (dyn StdError + 'static)) -> Option<Option<&'a (dyn StdError + 'static)>>;

static REGISTRY: Lazy<DashMap<TypeId, Probe>> = Lazy::new(DashMap::new);

fn probe_for<'a, T>(
    err: &'a (dyn StdError + 'static),
) -> Option<Option<&'a (dyn StdError + 'static)>>
where
    T: Causer + StdError + 'static,
{
    err.downcast_ref::<T>().map(Causer::cause)
}

/// Let the chain walker use `T`'s legacy accessor.
///
/// Registering the same type twice is harmless.
pub fn register<T>()
where
    T: Causer + StdError + 'static,
{
    if REGISTRY.insert(TypeId::of::<T>(), probe_for::<T>).is_none() {
        tracing::debug!("Registered legacy cause accessor for {}", type_name::<T>());
    }
}

/// Whether `T` has been registered.
pub fn is_registered<T: 'static>() -> bool {
    REGISTRY.contains_key(&TypeId::of::<T>())
}

/// Ask `err` for its cause through the legacy accessor.
///
/// Returns `None` if `err` does not expose one.
pub(crate) fn legacy_cause<'a>(
    err: &'a (dyn StdError + 'static),
) -> Option<Option<&'a (dyn StdError + 'static)>> {
    if let Some(own) = err.downcast_ref::<Error>() {
        return Some(Causer::cause(own));
    }
    if REGISTRY.is_empty() {
        return None;
    }
    REGISTRY.iter().find_map(|probe| (*probe.value())(err))
}
