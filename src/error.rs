use core::fmt;

/// Broad classes of failure shared by every cipher
///
/// Each module keeps its own detailed `Error`, and reports which class it falls under via `kind()`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key is empty, or structurally wrong for the cipher
    InvalidKey,
    /// Text cannot be processed under the cipher's shape rules
    InvalidInput,
    /// Character has no cell in the cipher's lookup table
    Lookup,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidKey => f.write_str("invalid key"),
            ErrorKind::InvalidInput => f.write_str("invalid input"),
            ErrorKind::Lookup => f.write_str("lookup error"),
        }
    }
}
