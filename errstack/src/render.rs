//! Rendering modes shared by frames, stack traces and errors

use std::fmt;

/// Text rendering mode.
///
/// Each variant corresponds to one of the classic `printf`-style verbs used
/// by stack-annotated error libraries:
///
/// | Verb       | Frame                          | StackTrace                  |
/// |------------|--------------------------------|-----------------------------|
/// | `Short`    | `file.rs`                      | `[file.rs file.rs]`         |
/// | `Long`     | `crate::func\n\t/path/file.rs` | `[` + frames + `]`          |
/// | `Line`     | `42`                           | `[42 7]`                    |
/// | `Name`     | `func`                         | `[func main]`               |
/// | `Default`  | `file.rs:42`                   | `[file.rs:42 file.rs:7]`    |
/// | `Extended` | `crate::func\n\t/path/file.rs:42` | one `\n`-led frame per entry |
/// | `Debug`    | `file.rs:42`                   | `[]Frame{file.rs:42}`       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// File name only (`%s`)
    Short,
    /// Qualified function name and full file path (`%+s`)
    Long,
    /// Line number (`%d`)
    Line,
    /// Function name without its module path (`%n`)
    Name,
    /// `file:line` (`%v`)
    Default,
    /// Qualified function name and `path:line` (`%+v`)
    Extended,
    /// Construction-style listing (`%#v`)
    Debug,
}

/// Something that renders differently under each [`Verb`].
pub trait Render {
    /// Write the rendering for `verb` into `f`.
    fn render_into(&self, f: &mut fmt::Formatter<'_>, verb: Verb) -> fmt::Result;

    /// Adapter implementing [`fmt::Display`] for a fixed verb.
    fn display(&self, verb: Verb) -> Rendered<'_, Self> {
        Rendered { value: self, verb }
    }

    /// Render to an owned string.
    fn render(&self, verb: Verb) -> String {
        self.display(verb).to_string()
    }
}

/// A value paired with the verb it should be displayed under.
pub struct Rendered<'a, T: ?Sized> {
    value: &'a T,
    verb: Verb,
}

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.render_into(f, self.verb)
    }
}

/// Verb selected by `{}` versus `{:#}`.
pub(crate) fn display_verb(f: &fmt::Formatter<'_>) -> Verb {
    if f.alternate() {
        Verb::Extended
    } else {
        Verb::Default
    }
}
