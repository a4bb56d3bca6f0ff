//! Macros for formatted error creation and early returns
//!
//! Format arguments are rendered immediately; the resulting error stores the
//! finished string.

/// Create a leaf error from a format string, recording the caller's stack.
///
/// ```
/// let err = errstack::errorf!("read {} bytes", 3);
/// assert_eq!(err.to_string(), "read 3 bytes");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Error::new(::std::format!($($arg)*))
    };
}

/// Wrap an error with a formatted message and the caller's stack.
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::wrap($err, ::std::format!($($arg)*))
    };
}

/// Prefix an error's message with a formatted message.
#[macro_export]
macro_rules! with_messagef {
    ($err:expr, $($arg:tt)*) => {
        $crate::Error::with_message($err, ::std::format!($($arg)*))
    };
}

/// Return early with a leaf error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err($crate::errorf!($($arg)*).into())
    };
}

/// Return early with a leaf error unless the condition holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
