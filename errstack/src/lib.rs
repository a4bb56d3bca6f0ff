//! Error annotation with captured call stacks
//!
//! This crate attaches context to errors as they propagate:
//! - Leaf errors carrying a message and the stack they were created on
//! - Stack and message wrappers layered over any existing error
//! - Lazy, cached resolution of frames to function, file and line
//! - Chain walking compatible with both `source()` and the legacy
//!   [`Causer`] accessor
//!
//! ```
//! use errstack::{chain, Error, ResultExt};
//!
//! fn read() -> Result<(), std::io::Error> {
//!     Err(std::io::Error::other("EOF"))
//! }
//!
//! let err = read().wrap("read config").unwrap_err();
//! assert_eq!(err.to_string(), "read config: EOF");
//! assert!(chain::find::<std::io::Error>(&err).is_some());
//! assert!(err.stack_trace().is_some());
//!
//! let leaf = Error::new("whoops");
//! let wrapped = Error::wrap(leaf.clone(), "oh noes");
//! assert!(wrapped.root_cause().downcast_ref::<Error>() == Some(&leaf));
//! ```
//!
//! `{}` prints the message chain; `{:#}` and `{:?}` add every recorded
//! stack. [`Render`] selects any other [`Verb`] explicitly.

pub mod causer;
pub mod chain;
pub mod config;
pub mod error;
pub mod frame;
pub mod render;
pub mod stack;
mod symbol;

pub use causer::Causer;
pub use chain::Chain;
pub use config::{Config, ConfigError};
pub use error::{Error, LinkKind, Result, ResultExt};
pub use frame::Frame;
pub use render::{Render, Rendered, Verb};
pub use stack::StackTrace;
