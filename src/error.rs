use std::fmt;

use thiserror::Error;

/// Alias for a `Result` with the error type `dec_bigint::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Line and column of a character in the parsed input, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Every way an operation on a [`BigInt`](crate::BigInt) can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not start with a decimal digit after the optional sign,
    /// or carried trailing characters after the number.
    #[error("expected decimal digit, found {} at {}", Found(.found), .at)]
    Parse { found: Option<char>, at: Position },

    /// The source failed to deliver its characters.
    #[error("read error at {at}: {message}")]
    Io { message: String, at: Position },

    #[error("division by zero")]
    DivisionByZero,

    /// A narrowing conversion did not fit the target type.
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
}

struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(c) => write!(f, "{:?}", c),
            None => f.write_str("end of input"),
        }
    }
}

#[test]
fn test_display() {
    let at = Position { line: 1, column: 3 };
    assert_eq!(
        Error::Parse { found: Some('x'), at }.to_string(),
        "expected decimal digit, found 'x' at line 1 column 3"
    );
    assert_eq!(
        Error::Parse { found: None, at }.to_string(),
        "expected decimal digit, found end of input at line 1 column 3"
    );
    assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    assert_eq!(Error::OutOfRange("i64").to_string(), "value out of range for i64");
}
