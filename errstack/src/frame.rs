//! A single captured call-site location

use crate::render::{display_verb, Render, Verb};
use crate::stack;
use crate::symbol::{self, Symbol};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Placeholder text for anything that cannot be resolved
const UNKNOWN: &str = "unknown";

/// One program location, stored as the return address of a call.
///
/// A frame is just a number. Function, file and line are looked up from the
/// process's debug info only when the frame is rendered, and cached
/// process-wide. The zero frame means "unknown location".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Frame(usize);

impl Frame {
    /// The unknown location
    pub const UNKNOWN: Frame = Frame(0);

    /// Record the location of the caller, `skip` frames further up.
    ///
    /// `Frame::caller(0)` is the line that called `Frame::caller`.
    #[inline(never)]
    pub fn caller(skip: usize) -> Self {
        stack::walk(Self::caller as usize, skip, 1)
            .first()
            .copied()
            .unwrap_or(Self::UNKNOWN)
    }

    /// Wrap a raw instruction pointer.
    pub const fn from_ip(ip: usize) -> Self {
        Self(ip)
    }

    /// The raw instruction pointer
    pub const fn ip(self) -> usize {
        self.0
    }

    /// Whether this frame resolves to no known symbol.
    pub fn is_unknown(self) -> bool {
        self.symbol().is_none()
    }

    fn symbol(self) -> Option<Arc<Symbol>> {
        symbol::resolve(self.0)
    }

    /// Fully qualified function name, or `"unknown"`.
    pub fn function(self) -> String {
        self.symbol()
            .map_or_else(|| UNKNOWN.to_string(), |sym| sym.function.clone())
    }

    /// Function name without its module path, or `"unknown"`.
    pub fn bare_name(self) -> String {
        self.symbol().map_or_else(
            || UNKNOWN.to_string(),
            |sym| symbol::bare_name(&sym.function).to_string(),
        )
    }

    /// Full source path, or `"unknown"`.
    pub fn file(self) -> String {
        self.symbol()
            .and_then(|sym| sym.file.clone())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Source line, or 0 when unknown.
    pub fn line(self) -> u32 {
        self.symbol().and_then(|sym| sym.line).unwrap_or(0)
    }

    /// Text form used for serialization: `function path:line`, or
    /// `"unknown"` for an unresolvable frame.
    pub fn marshal_text(self) -> String {
        match self.symbol() {
            Some(sym) => format!(
                "{} {}:{}",
                sym.function,
                sym.file.as_deref().unwrap_or(UNKNOWN),
                sym.line.unwrap_or(0)
            ),
            None => UNKNOWN.to_string(),
        }
    }
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

impl Render for Frame {
    fn render_into(&self, f: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result {
        let Some(sym) = self.symbol() else {
            return match verb {
                Verb::Short | Verb::Long | Verb::Name => f.write_str(UNKNOWN),
                Verb::Line => f.write_str("0"),
                Verb::Default | Verb::Extended | Verb::Debug => write!(f, "{UNKNOWN}:0"),
            };
        };

        let file = sym.file.as_deref().unwrap_or(UNKNOWN);
        let line = sym.line.unwrap_or(0);

        match verb {
            Verb::Short => f.write_str(base_name(file)),
            Verb::Long => write!(f, "{}\n\t{file}", sym.function),
            Verb::Line => write!(f, "{line}"),
            Verb::Name => f.write_str(symbol::bare_name(&sym.function)),
            Verb::Default | Verb::Debug => write!(f, "{}:{line}", base_name(file)),
            Verb::Extended => write!(f, "{}\n\t{file}:{line}", sym.function),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, display_verb(f))
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.marshal_text())
    }
}

impl From<usize> for Frame {
    fn from(ip: usize) -> Self {
        Self(ip)
    }
}
