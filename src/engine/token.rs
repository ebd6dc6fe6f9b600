/// Classifies a token into one of the fixed lexical kinds.
///
/// The kind decides how the grammar validator and the parser treat a token;
/// the raw text is kept separately in [`Token::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An unsigned numeric constant such as `42`, `.5`, or `1.92E+30`.
    Literal,
    /// A numeric constant with a glued leading sign, such as `-2` where the
    /// sign does not act as a binary operator.
    SignedLiteral,
    /// `(` opening a plain grouping bracket.
    OpeningBracket,
    /// `)` closing a plain grouping bracket.
    ClosingBracket,
    /// `(` opening a function argument list.
    OpeningFunctionBracket,
    /// `)` closing a function argument list.
    ClosingFunctionBracket,
    /// `+ - * ** / %`.
    ArithmeticOperator,
    /// `= ! < >` and their two-character forms `== != <> <= >=`.
    ComparisonOperator,
    /// A name from the function allow-list, followed by `(`.
    Function,
    /// An identifier that is not a function call.
    Variable,
    /// `,` separating function arguments.
    CommaFunction,
    /// `?` opening a ternary conditional.
    TernaryThen,
    /// `:` closing a ternary conditional.
    TernaryElse,
}

/// An immutable, position-tagged lexical unit.
///
/// Tokens are created by the lexer with their final kind already decided and
/// are read-only afterward. Positions refer to the expression text the token
/// was read from: `position` is the absolute character offset, `line` is
/// 1-based, and `column` is the 0-based offset from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:     TokenKind,
    value:    String,
    position: usize,
    line:     usize,
    column:   usize,
}

impl Token {
    /// Creates a token. Only the lexer constructs tokens; the value must not
    /// be blank and the line must be 1-based.
    pub(crate) fn new(kind: TokenKind,
                      value: impl Into<String>,
                      position: usize,
                      line: usize,
                      column: usize)
                      -> Self {
        let value = value.into();
        debug_assert!(!value.trim().is_empty(), "blank token value");
        debug_assert!(line >= 1, "line numbers are 1-based");
        Self { kind,
               value,
               position,
               line,
               column }
    }

    /// The lexical kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw text this token was read from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Absolute character offset of the token in the expression text.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// 1-based source line of the token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 0-based source column of the token.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Whether the token is a plain or signed numeric literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Literal | TokenKind::SignedLiteral)
    }
}
