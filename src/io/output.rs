use std::fmt::Display;
use std::io::{self, BufWriter, Write};

use crate::error::Result;

/// Buffered writer for the primary output.
///
/// Nothing reaches the sink before `flush`, `close`, or drop. Drop flushes,
/// so output written before an error or a panic is not lost.
pub struct Output<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> Output<W> {
    pub fn new(w: W) -> Self {
        Self {
            inner: BufWriter::new(w),
        }
    }

    /// Writes the values separated by single spaces, then a newline.
    pub fn print<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut sep = "";
        for value in values {
            write!(self.inner, "{}{}", sep, value)?;
            sep = " ";
        }
        writeln!(self.inner)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

impl<W: Write> Write for Output<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Drop for Output<W> {
    fn drop(&mut self) {
        // errors can't be reported from drop
        let _ = self.inner.flush();
    }
}

/// `outln!(out, a, b, ...)` prints values of mixed types on one line.
#[macro_export]
macro_rules! outln {
    ($out:expr $(,)?) => {
        $out.print(::std::iter::empty::<&str>())
    };
    ($out:expr, $($value:expr),+ $(,)?) => {
        $out.print([$(&$value as &dyn ::std::fmt::Display),+])
    };
}
