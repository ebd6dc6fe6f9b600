#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or grammar validation.
pub enum ParseError {
    /// Found a character the lexer cannot classify.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// 1-based source line of the character.
        line:      usize,
        /// 0-based source column of the character.
        column:    usize,
    },
    /// An arithmetic operator was doubled up, such as `++` or `//`.
    InvalidOperator {
        /// The doubled operator as written.
        operator: String,
        /// 1-based source line of the operator.
        line:     usize,
        /// 0-based source column of the operator.
        column:   usize,
    },
    /// An opening `(` or ternary `?` has no matching closer.
    UnclosedBracket {
        /// The opener that was never closed: `'('` or `'?'`.
        bracket: char,
        /// 1-based source line of the opener.
        line:    usize,
        /// 0-based source column of the opener.
        column:  usize,
    },
    /// A `)` or ternary `:` appeared with no matching opener.
    UnmatchedClosing {
        /// The closer that has no opener: `')'` or `':'`.
        bracket: char,
        /// 1-based source line of the closer.
        line:    usize,
        /// 0-based source column of the closer.
        column:  usize,
    },
    /// A numeric literal runs into characters that cannot terminate it,
    /// such as the second dot in `42.79.24`.
    InvalidLiteral {
        /// The malformed literal including the offending character.
        literal: String,
        /// 1-based source line of the literal.
        line:    usize,
        /// 0-based source column of the literal.
        column:  usize,
    },
    /// An identifier followed by `(` is not in the function allow-list.
    UnknownFunction {
        /// The unrecognized function name.
        name:   String,
        /// 1-based source line of the name.
        line:   usize,
        /// 0-based source column of the name.
        column: usize,
    },
    /// The expression text contained no tokens at all.
    EmptyExpression,
    /// The token sequence violates the adjacency grammar.
    ///
    /// Grammar checking is not fail-fast: every violation found in one pass
    /// over the sequence is collected here.
    Grammar {
        /// Human-readable violation messages, each with line and column.
        violations: Vec<String>,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line, column } => {
                write!(f, "Unexpected character \"{character}\" in line {line}, column {column}")
            },

            Self::InvalidOperator { operator, line, column } => {
                write!(f, "Invalid operator \"{operator}\" in line {line}, column {column}")
            },

            Self::UnclosedBracket { bracket, line, column } => {
                write!(f, "Unclosed bracket \"{bracket}\" in line {line}, column {column}")
            },

            Self::UnmatchedClosing { bracket, line, column } => {
                write!(f, "Unmatched \"{bracket}\" in line {line}, column {column}")
            },

            Self::InvalidLiteral { literal, line, column } => {
                write!(f, "Invalid literal \"{literal}\" in line {line}, column {column}")
            },

            Self::UnknownFunction { name, line, column } => {
                write!(f, "Unknown function name \"{name}\" in line {line}, column {column}")
            },

            Self::EmptyExpression => {
                write!(f, "Invalid expression: empty value after tokenizing")
            },

            Self::Grammar { violations } => write!(f, "{}", violations.join("\n")),
        }
    }
}

impl std::error::Error for ParseError {}
