/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing input and parsing
/// statements. Parse errors include unclassifiable characters, malformed
/// literals, missing closing parentheses, and any other issues detected while
/// reading a statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a statement,
/// such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure the calculator can produce, as a single union the driver can
/// match on.
///
/// The parser and evaluator are fused, so one statement can fail with either
/// a [`ParseError`] or a [`RuntimeError`]; both convert into `Error` via
/// `From`, letting `?` propagate them through the same call chain. Write
/// failures on the output streams surface as `Io`.
pub enum Error {
    /// A tokenizing or parsing failure.
    Parse(ParseError),
    /// An evaluation failure.
    Runtime(RuntimeError),
    /// An output stream could not be written to.
    Io(std::io::Error),
}

impl Error {
    /// Returns `true` for failures that indicate a bug or a broken stream
    /// rather than bad user input.
    ///
    /// The interactive driver reports non-fatal errors to the diagnostic
    /// stream and keeps going; fatal ones propagate out of the loop and
    /// terminate the process with a non-zero exit code.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self,
                 Self::Parse(ParseError::PushbackOverflow { .. }) | Self::Io(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
