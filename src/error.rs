use core::fmt;

/// Failures of the (few) fallible operations.
///
/// Arithmetic itself never fails; only parsing decimal text and
/// narrowing into native integers can.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// empty string, or a sign without digits
    Empty,
    /// something other than `0..=9` after the optional leading `-`
    InvalidDigit,
    /// value does not fit into the requested native integer
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Empty => "cannot parse integer from empty string",
            Error::InvalidDigit => "invalid digit found in string",
            Error::Overflow => "integer too large for target type",
        })
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
