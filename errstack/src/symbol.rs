//! Process-wide symbol resolution with a read-through cache

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::ffi::c_void;
use std::sync::Arc;

/// Resolved location of one instruction pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Symbol {
    /// Demangled, hash-free function path
    pub function: String,
    /// Source file path, if debug info carries one
    pub file: Option<String>,
    /// Source line, if debug info carries one
    pub line: Option<u32>,
}

/// Resolutions never change for the life of the process, so entries are
/// never invalidated. Failed lookups are cached as `None`.
static SYMBOLS: Lazy<DashMap<usize, Option<Arc<Symbol>>>> = Lazy::new(DashMap::new);

/// Resolve `ip` to its symbol, consulting the cache first.
pub(crate) fn resolve(ip: usize) -> Option<Arc<Symbol>> {
    if ip == 0 {
        return None;
    }

    if let Some(hit) = SYMBOLS.get(&ip) {
        return hit.value().clone();
    }

    tracing::trace!("Resolving symbol for ip {ip:#x}");
    let resolved = lookup(ip).map(Arc::new);
    let entry = SYMBOLS.entry(ip).or_insert(resolved);
    entry.value().clone()
}

fn lookup(ip: usize) -> Option<Symbol> {
    let mut found = None;

    // Inlined frames report several symbols for one address; the first is
    // the innermost, which is where the call actually sits.
    backtrace::resolve(ip as *mut c_void, |symbol| {
        if found.is_some() {
            return;
        }
        let Some(name) = symbol.name() else {
            return;
        };
        found = Some(Symbol {
            function: format!("{name:#}"),
            file: symbol.filename().map(|path| path.display().to_string()),
            line: symbol.lineno(),
        });
    });

    found
}

/// Strip the module path from a qualified function name.
///
/// The result is everything after the last `::` that sits outside angle
/// brackets. A qualified-impl group such as `<app::Reader as io::Read>` is
/// kept whole together with the method that follows it, and closure markers
/// (`{{closure}}`, `{closure#0}`) stay attached to the function that
/// encloses them.
pub(crate) fn bare_name(qualified: &str) -> &str {
    let starts = segment_starts(qualified);
    let segment = |k: usize| &qualified[starts[k]..];

    let mut k = starts.len() - 1;
    while k > 0 && segment(k).starts_with('{') {
        k -= 1;
    }
    if k > 0 && segment(k - 1).starts_with('<') {
        k -= 1;
    }

    &qualified[starts[k]..]
}

/// Byte offsets where each `::`-separated segment begins, ignoring
/// separators nested inside angle brackets. Never empty.
fn segment_starts(qualified: &str) -> Vec<usize> {
    let bytes = qualified.as_bytes();
    let mut starts = vec![0];
    let mut depth = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                starts.push(i + 2);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    starts
}
