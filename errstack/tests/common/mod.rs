//! Shared test helpers

#![allow(dead_code)]

use std::error::Error as StdError;

/// Route `tracing` output through `env_logger` in test mode.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// A comparable sentinel error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sentinel")]
pub struct Sentinel;

/// A value-carrying error used as a type-extraction target
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{msg}")]
pub struct CustomErr {
    pub msg: String,
}

/// Wraps through `source()` only, like a format-string wrap in other
/// ecosystems
#[derive(Debug, thiserror::Error)]
#[error("wrap it: {0}")]
pub struct NativeWrap(#[source] pub Box<dyn StdError + Send + Sync>);

impl NativeWrap {
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self(Box::new(err))
    }
}
