#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while storing variables, resolving
/// them, or evaluating an expression.
pub enum RuntimeError {
    /// Tried to bind a variable under a name that is not a valid identifier.
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// Tried to resolve a variable that is not set.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Binding a variable would make the store cyclic.
    CircularReference {
        /// The variable whose resolution chain revisits itself.
        name: String,
    },
    /// Variable resolution nested deeper than the fixed maximum.
    ///
    /// This is a structural safety valve, distinct from
    /// [`RuntimeError::CircularReference`]: the store guarantees acyclicity
    /// on every write, so hitting this limit means the bindings are acyclic
    /// but nested too deeply to resolve.
    RecursionLimit {
        /// The maximum nesting depth that was exceeded.
        limit: usize,
    },
    /// Evaluation was requested but no expression is set.
    NothingToEvaluate,
    /// A token appeared where the evaluator cannot accept it.
    UnexpectedToken {
        /// The token value as written.
        value:  String,
        /// 1-based source line of the token.
        line:   usize,
        /// 0-based source column of the token.
        column: usize,
    },
    /// The token sequence ended in the middle of a construct.
    UnexpectedEndOfInput,
    /// Tokens were left over after a complete expression was parsed.
    TrailingTokens {
        /// The first leftover token value.
        value:  String,
        /// 1-based source line of the token.
        line:   usize,
        /// 0-based source column of the token.
        column: usize,
    },
    /// A comparison token that lexes but cannot be evaluated, such as a
    /// single `=` or `!`.
    UnsupportedOperator {
        /// The operator as written.
        operator: String,
        /// 1-based source line of the operator.
        line:     usize,
        /// 0-based source column of the operator.
        column:   usize,
    },
    /// A built-in function was called with the wrong number of arguments.
    ArgumentCount {
        /// The function name.
        name:     String,
        /// The arity the function requires.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// 1-based source line of the call.
        line:     usize,
        /// 0-based source column of the call.
        column:   usize,
    },
    /// Integer division by zero.
    DivisionByZero {
        /// 1-based source line of the call.
        line:   usize,
        /// 0-based source column of the call.
        column: usize,
    },
    /// A function name reached the evaluator without being in the
    /// allow-list. Cannot happen for token sequences built by the lexer.
    UnknownFunction {
        /// The function name.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariableName { name } => {
                write!(f,
                       "Wrong variable name \"{name}\", only ASCII letters and digits allowed, \
                        and the first character must be a letter")
            },

            Self::UnknownVariable { name } => write!(f, "Variable \"{name}\" not set"),

            Self::CircularReference { name } => {
                write!(f, "Circular reference detected for variable \"{name}\"")
            },

            Self::RecursionLimit { limit } => {
                write!(f, "Maximum resolution nesting level \"{limit}\" surpassed")
            },

            Self::NothingToEvaluate => write!(f, "No expression set"),

            Self::UnexpectedToken { value, line, column } => {
                write!(f, "Unexpected token \"{value}\" in line {line}, column {column}")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of expression"),

            Self::TrailingTokens { value, line, column } => {
                write!(f,
                       "Unexpected token \"{value}\" after end of expression in line {line}, \
                        column {column}")
            },

            Self::UnsupportedOperator { operator, line, column } => {
                write!(f, "Operator \"{operator}\" not supported in line {line}, column {column}")
            },

            Self::ArgumentCount { name, expected, found, .. } => {
                write!(f,
                       "{name}() expects exactly {expected} parameter{}, {found} given",
                       if *expected == 1 { "" } else { "s" })
            },

            Self::DivisionByZero { line, column } => {
                write!(f, "Division by zero in line {line}, column {column}")
            },

            Self::UnknownFunction { name } => write!(f, "Unknown function \"{name}\""),
        }
    }
}

impl std::error::Error for RuntimeError {}
