use std::io::BufRead;
use std::str::{self, FromStr};

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Result<&str>;
    fn line(&mut self) -> Result<String>;

    fn skip_line(&mut self) -> Result<()> {
        self.line().map(drop)
    }

    fn value<T: FromStr>(&mut self) -> Result<T> {
        let token = self.token()?;
        token.parse::<T>().map_err(|_| Error::Format {
            token: token.to_owned(),
            ty: std::any::type_name::<T>(),
        })
    }

    /// Reads `n` values in order. Fails as a whole on the first bad token.
    fn values<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }

    fn next_int(&mut self) -> Result<i32> {
        self.value()
    }

    fn next_long(&mut self) -> Result<i64> {
        self.value()
    }

    fn next_double(&mut self) -> Result<f64> {
        self.value()
    }

    fn next_int_array(&mut self, n: usize) -> Result<Vec<i32>> {
        self.values(n)
    }

    fn next_long_array(&mut self, n: usize) -> Result<Vec<i64>> {
        self.values(n)
    }
}

// cheap whitespace check, also treats control bytes as separators
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// Pulls one line at a time from `inner` and hands out its tokens.
///
/// `line` bypasses the tokenized line: it reads the next raw line from
/// `inner`, and tokens still pending in `line_buf` stay available. Raw lines
/// end at `\n`, `\r\n` or a lone `\r`.
pub struct LineSyncedInput<R: BufRead> {
    line_buf: Vec<u8>,
    line_cursor: usize,
    inner: R,
}

impl<R: BufRead> LineSyncedInput<R> {
    pub fn new(r: R) -> Self {
        Self {
            line_buf: Vec::new(),
            line_cursor: 0,
            inner: r,
        }
    }

    fn eol(&self) -> bool {
        self.line_cursor == self.line_buf.len()
    }

    // false on EOF
    fn refill_line_buf(&mut self) -> Result<bool> {
        self.line_buf.clear();
        self.line_cursor = 0;
        Ok(self.inner.read_until(b'\n', &mut self.line_buf)? > 0)
    }
}

impl<R: BufRead> InputStream for LineSyncedInput<R> {
    fn token(&mut self) -> Result<&str> {
        loop {
            if self.eol() && !self.refill_line_buf()? {
                return Err(Error::EndOfInput);
            }

            let rest = &self.line_buf[self.line_cursor..];
            let skip = rest
                .iter()
                .position(|&c| !is_whitespace(c))
                .unwrap_or(rest.len());
            self.line_cursor += skip;

            let rest = &self.line_buf[self.line_cursor..];
            let len = rest
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(rest.len());
            if len > 0 {
                let start = self.line_cursor;
                self.line_cursor += len;
                return Ok(str::from_utf8(&self.line_buf[start..start + len])?);
            }
        }
    }

    fn line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        let mut read_any = false;
        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                if !read_any {
                    return Err(Error::EndOfInput);
                }
                break;
            }
            read_any = true;

            match available.iter().position(|&c| c == b'\n' || c == b'\r') {
                Some(idx) => {
                    let cr = available[idx] == b'\r';
                    buf.extend_from_slice(&available[..idx]);
                    self.inner.consume(idx + 1);
                    // \r\n counts as one terminator
                    if cr && self.inner.fill_buf()?.first() == Some(&b'\n') {
                        self.inner.consume(1);
                    }
                    break;
                }
                None => {
                    let n = available.len();
                    buf.extend_from_slice(available);
                    self.inner.consume(n);
                }
            }
        }
        Ok(str::from_utf8(&buf)?.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(s: &str) -> LineSyncedInput<&[u8]> {
        LineSyncedInput::new(s.as_bytes())
    }

    #[test]
    fn tokens_span_lines() {
        let mut input = source("3 4\n5\n");
        assert_eq!(input.next_int().unwrap(), 3);
        assert_eq!(input.next_int().unwrap(), 4);
        assert_eq!(input.next_int().unwrap(), 5);
        assert!(matches!(input.token(), Err(Error::EndOfInput)));
    }

    #[test]
    fn blank_lines_are_skipped_by_token() {
        let mut input = source("\n\n  \t\nfoo   bar\r\n\nbaz");
        assert_eq!(input.token().unwrap(), "foo");
        assert_eq!(input.token().unwrap(), "bar");
        assert_eq!(input.token().unwrap(), "baz");
        assert!(matches!(input.token(), Err(Error::EndOfInput)));
    }

    #[test]
    fn empty_input() {
        let mut input = source("");
        assert!(matches!(input.token(), Err(Error::EndOfInput)));
        assert!(matches!(input.line(), Err(Error::EndOfInput)));
    }

    #[test]
    fn bad_literal_is_a_format_error() {
        let mut input = source("abc 2147483648 1.5x");
        match input.next_int() {
            Err(Error::Format { token, ty }) => {
                assert_eq!(token, "abc");
                assert_eq!(ty, "i32");
            }
            other => panic!("expected format error, got {:?}", other),
        }
        // out of range for i32
        assert!(matches!(input.next_int(), Err(Error::Format { .. })));
        assert!(matches!(input.next_double(), Err(Error::Format { .. })));
    }

    #[test]
    fn numeric_types() {
        let mut input = source("-9000000000 2.5 18446744073709551615");
        assert_eq!(input.next_long().unwrap(), -9_000_000_000);
        assert_eq!(input.next_double().unwrap(), 2.5);
        assert_eq!(input.value::<u64>().unwrap(), u64::MAX);
    }

    #[test]
    fn line_keeps_empty_lines() {
        let mut input = source("hello world\n\r\n\nlast");
        assert_eq!(input.line().unwrap(), "hello world");
        assert_eq!(input.line().unwrap(), "");
        assert_eq!(input.line().unwrap(), "");
        assert_eq!(input.line().unwrap(), "last");
        assert!(matches!(input.line(), Err(Error::EndOfInput)));
    }

    #[test]
    fn line_splits_on_carriage_returns() {
        let mut input = source("a\rb\nc\r\nd\r");
        assert_eq!(input.line().unwrap(), "a");
        assert_eq!(input.line().unwrap(), "b");
        assert_eq!(input.line().unwrap(), "c");
        assert_eq!(input.line().unwrap(), "d");
        assert!(matches!(input.line(), Err(Error::EndOfInput)));
    }

    #[test]
    fn crlf_split_across_reads() {
        use std::io::{BufReader, Read};

        // capacity 3 puts the \r and the \n into different fill_buf calls
        let reader = BufReader::with_capacity(3, "ab\r\nxy\n".as_bytes());
        let mut input = LineSyncedInput::new(reader);
        assert_eq!(input.line().unwrap(), "ab");
        assert_eq!(input.line().unwrap(), "xy");
        let mut rest = String::new();
        input.inner.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn line_after_count() {
        let mut input = source("2\nAlice Smith\nBob\n");
        let n: usize = input.value().unwrap();
        let names: Vec<String> = (0..n).map(|_| input.line().unwrap()).collect();
        assert_eq!(names, ["Alice Smith", "Bob"]);
    }

    #[test]
    fn line_leaves_pending_tokens() {
        let mut input = source("1 2\nraw line\n3\n");
        assert_eq!(input.next_int().unwrap(), 1);
        assert_eq!(input.line().unwrap(), "raw line");
        assert_eq!(input.next_int().unwrap(), 2);
        assert_eq!(input.next_int().unwrap(), 3);
    }

    #[test]
    fn skip_line() {
        let mut input = source("header to ignore\n7\n");
        input.skip_line().unwrap();
        assert_eq!(input.next_int().unwrap(), 7);
    }

    #[test]
    fn arrays() {
        let mut input = source("4\n1 2\n3 4\n10000000000 -1");
        let n = input.value::<usize>().unwrap();
        assert_eq!(input.next_int_array(n).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(input.next_long_array(2).unwrap(), vec![10_000_000_000, -1]);
        assert_eq!(input.next_int_array(0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn arrays_fail_as_a_whole() {
        let mut input = source("1 2 x 4");
        assert!(matches!(input.next_int_array(4), Err(Error::Format { .. })));

        let mut input = source("1 2");
        assert!(matches!(input.next_long_array(3), Err(Error::EndOfInput)));
    }

    #[test]
    fn invalid_utf8_token() {
        let mut input = LineSyncedInput::new(&b"ok \xff\xfe\n"[..]);
        assert_eq!(input.token().unwrap(), "ok");
        assert!(matches!(input.token(), Err(Error::Utf8(_))));
    }
}
