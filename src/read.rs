//! Character sources the decimal parser reads from.
//!
//! A source hands out one character at a time through [`Read::peek`] and
//! [`Read::consume`], and carries a sticky failure flag the parser raises when
//! the input does not hold a number. Characters consumed before a failure are
//! not given back.

use std::io;

use crate::error::Position;

pub trait Read {
    /// Next character without consuming it, `None` at end of input.
    fn peek(&mut self) -> Option<char>;

    /// Only valid after a call to peek(). Discards the peeked character.
    fn consume(&mut self);

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Marks the source as failed. The flag stays set until [`Read::clear`].
    fn fail(&mut self);

    fn failed(&self) -> bool;

    fn clear(&mut self);

    /// Position of the character the next call to peek() returns.
    fn position(&self) -> Position;

    /// Error raised by the underlying stream, if any. Taking it leaves `None`.
    fn take_io_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<R: Read + ?Sized> Read for &mut R {
    fn peek(&mut self) -> Option<char> {
        (**self).peek()
    }

    fn consume(&mut self) {
        (**self).consume()
    }

    fn at_end(&mut self) -> bool {
        (**self).at_end()
    }

    fn fail(&mut self) {
        (**self).fail()
    }

    fn failed(&self) -> bool {
        (**self).failed()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn take_io_error(&mut self) -> Option<io::Error> {
        (**self).take_io_error()
    }
}

struct LineCol {
    line: usize,
    col: usize,
}

impl LineCol {
    fn new() -> Self {
        LineCol { line: 1, col: 0 }
    }

    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }

    fn next_position(&self) -> Position {
        Position { line: self.line, column: self.col + 1 }
    }
}

/// Reads from an in-memory string.
pub struct StrRead<'a> {
    text: &'a str,
    /// Byte index of the next character.
    index: usize,
    pos: LineCol,
    failed: bool,
}

impl<'a> StrRead<'a> {
    pub fn new(text: &'a str) -> Self {
        StrRead { text, index: 0, pos: LineCol::new(), failed: false }
    }

    /// The part of the input not consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.text[self.index..]
    }
}

impl<'a> Read for StrRead<'a> {
    fn peek(&mut self) -> Option<char> {
        self.rest().chars().next()
    }

    fn consume(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.index += c.len_utf8();
            self.pos.advance(c);
        }
    }

    fn fail(&mut self) {
        self.failed = true;
    }

    fn failed(&self) -> bool {
        self.failed
    }

    fn clear(&mut self) {
        self.failed = false;
    }

    fn position(&self) -> Position {
        self.pos.next_position()
    }
}

/// Reads from a byte stream. Every byte is taken as one character, so only
/// ASCII input is meaningful.
///
/// The stream is read one byte at a time; wrap unbuffered sources such as a
/// [`File`](std::fs::File) in a [`BufReader`](std::io::BufReader).
pub struct IoRead<R> {
    bytes: io::Bytes<R>,
    /// Temporary storage of peeked byte.
    ch: Option<u8>,
    pos: LineCol,
    failed: bool,
    io_error: Option<io::Error>,
    /// Set once the stream hit its end or an error, it is never read again.
    eof_or_broken: bool,
}

impl<R: io::Read> IoRead<R> {
    pub fn new(reader: R) -> Self {
        IoRead {
            bytes: reader.bytes(),
            ch: None,
            pos: LineCol::new(),
            failed: false,
            io_error: None,
            eof_or_broken: false,
        }
    }
}

impl<R: io::Read> Read for IoRead<R> {
    fn peek(&mut self) -> Option<char> {
        if self.eof_or_broken {
            return None;
        }
        match self.ch {
            Some(ch) => Some(ch as char),
            None => match self.bytes.next() {
                Some(Ok(ch)) => {
                    self.ch = Some(ch);
                    Some(ch as char)
                }
                Some(Err(err)) => {
                    log::trace!("byte stream failed at {}: {}", self.pos.next_position(), err);
                    self.failed = true;
                    self.io_error = Some(err);
                    self.eof_or_broken = true;
                    None
                }
                None => {
                    self.eof_or_broken = true;
                    None
                }
            },
        }
    }

    fn consume(&mut self) {
        if let Some(ch) = self.ch.take() {
            self.pos.advance(ch as char);
        }
    }

    fn fail(&mut self) {
        self.failed = true;
    }

    fn failed(&self) -> bool {
        self.failed
    }

    fn clear(&mut self) {
        self.failed = false;
        self.io_error = None;
    }

    fn position(&self) -> Position {
        self.pos.next_position()
    }

    fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_read_tracks_position() {
        let mut src = StrRead::new("a\nbc");
        assert_eq!(src.position(), Position { line: 1, column: 1 });
        assert_eq!(src.peek(), Some('a'));
        src.consume();
        src.consume();
        assert_eq!(src.position(), Position { line: 2, column: 1 });
        src.consume();
        assert_eq!(src.peek(), Some('c'));
        assert_eq!(src.position(), Position { line: 2, column: 2 });
        assert_eq!(src.rest(), "c");
        src.consume();
        assert!(src.at_end());
        src.consume();
        assert!(src.at_end());
    }

    #[test]
    fn fail_flag_is_sticky() {
        let mut src = StrRead::new("1");
        assert!(!src.failed());
        src.fail();
        assert!(src.failed());
        assert_eq!(src.peek(), Some('1'));
        src.clear();
        assert!(!src.failed());
    }

    #[test]
    fn io_read_peeks_once() {
        let mut src = IoRead::new("12".as_bytes());
        assert_eq!(src.peek(), Some('1'));
        assert_eq!(src.peek(), Some('1'));
        src.consume();
        assert_eq!(src.peek(), Some('2'));
        src.consume();
        assert_eq!(src.peek(), None);
        assert_eq!(src.position(), Position { line: 1, column: 3 });
    }

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
        }
    }

    #[test]
    fn io_read_error_fails_source() {
        let mut src = IoRead::new(Broken);
        assert_eq!(src.peek(), None);
        assert!(src.failed());
        let err = src.take_io_error().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("broken pipe"));
        assert!(src.take_io_error().is_none());
    }

    /// Fails on the first read and would succeed afterwards.
    struct Flaky {
        calls: usize,
    }

    impl io::Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls == 1 {
                return Err(io::Error::new(io::ErrorKind::Other, "reset by peer"));
            }
            buf[0] = b'5';
            Ok(1)
        }
    }

    #[test]
    fn io_read_stays_at_end_after_error() {
        let mut src = IoRead::new(Flaky { calls: 0 });
        assert_eq!(src.peek(), None);
        assert!(src.take_io_error().is_some());
        assert_eq!(src.peek(), None);
        src.clear();
        assert!(!src.failed());
        assert_eq!(src.peek(), None);
        assert!(src.at_end());
    }
}
