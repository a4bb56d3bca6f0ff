//! Stack-annotated errors
//!
//! Three kinds of link make up every chain built by this crate:
//! - leaf errors, owning a message and the stack they were created on
//! - stack wrappers, recording where an existing error passed through
//! - message wrappers, prefixing an existing error's message with context

mod constructors;
mod display;
pub mod extensions;
mod macros;
pub mod types;

pub use extensions::ResultExt;
pub use types::{Error, LinkKind, Result};
