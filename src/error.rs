/// Parsing errors.
///
/// Defines all error types that can occur while turning an expression string
/// into a validated token sequence: unexpected characters, malformed
/// literals, unknown function names, unclosed brackets, and grammar
/// violations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while storing variables,
/// resolving them, or evaluating a validated token sequence: unset or cyclic
/// variables, recursion-limit overruns, arity mismatches, and malformed
/// evaluation residue.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure the expression engine can report.
///
/// Unifies [`ParseError`] (lex and grammar time) and [`RuntimeError`] (store,
/// resolution, and evaluation time) so the public [`crate::Expression`] API
/// can return a single error type.
pub enum Error {
    /// The expression text could not be tokenized or failed grammar checks.
    Parse(ParseError),
    /// The expression could not be resolved or evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

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
