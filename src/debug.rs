//! Diagnostics on stderr. Kept off stdout so they never mix with the answer.

use std::fmt::Display;
use std::io::{self, Write};

pub const PREFIX: &str = "DEBUG:";

pub fn debug_to<W, I>(w: &mut W, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    write!(w, "{}", PREFIX)?;
    for value in values {
        write!(w, " {}", value)?;
    }
    writeln!(w)
}

pub fn debug<I>(values: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    // a broken stderr is not worth failing the run over
    let _ = debug_to(&mut io::stderr().lock(), values);
}

/// `debug!(a, b, ...)` writes `DEBUG: a b ...` to stderr.
#[macro_export]
macro_rules! debug {
    () => {
        $crate::debug::debug(::std::iter::empty::<&str>())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::debug::debug([$(&$value as &dyn ::std::fmt::Display),+])
    };
}
