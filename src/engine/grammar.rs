use crate::engine::token::{Token, TokenKind};

/// Kinds a well-formed expression may start with.
const FIRST: &[TokenKind] = &[TokenKind::Literal,
                              TokenKind::SignedLiteral,
                              TokenKind::OpeningBracket,
                              TokenKind::Function,
                              TokenKind::Variable];

/// Kinds a well-formed expression may end with.
const LAST: &[TokenKind] = &[TokenKind::Literal,
                             TokenKind::SignedLiteral,
                             TokenKind::ClosingBracket,
                             TokenKind::ClosingFunctionBracket,
                             TokenKind::Variable];

/// Kinds that may open an operand.
const OPERAND_START: &[TokenKind] = &[TokenKind::Literal,
                                      TokenKind::SignedLiteral,
                                      TokenKind::OpeningBracket,
                                      TokenKind::Function,
                                      TokenKind::Variable];

/// Kinds that may follow a finished operand.
const AFTER_OPERAND: &[TokenKind] = &[TokenKind::ClosingBracket,
                                      TokenKind::ClosingFunctionBracket,
                                      TokenKind::ArithmeticOperator,
                                      TokenKind::ComparisonOperator,
                                      TokenKind::CommaFunction,
                                      TokenKind::TernaryThen,
                                      TokenKind::TernaryElse];

/// Kinds allowed directly after a function's opening bracket. Like
/// [`OPERAND_START`] but an empty argument list is also allowed.
const AFTER_FUNCTION_OPEN: &[TokenKind] = &[TokenKind::Literal,
                                            TokenKind::SignedLiteral,
                                            TokenKind::OpeningBracket,
                                            TokenKind::Function,
                                            TokenKind::ClosingFunctionBracket,
                                            TokenKind::Variable];

/// Returns the kinds allowed to follow a token of the given kind.
const fn successors(kind: TokenKind) -> &'static [TokenKind] {
    match kind {
        TokenKind::Literal
        | TokenKind::SignedLiteral
        | TokenKind::ClosingBracket
        | TokenKind::ClosingFunctionBracket
        | TokenKind::Variable => AFTER_OPERAND,

        TokenKind::OpeningBracket
        | TokenKind::ArithmeticOperator
        | TokenKind::ComparisonOperator
        | TokenKind::CommaFunction
        | TokenKind::TernaryThen
        | TokenKind::TernaryElse => OPERAND_START,

        TokenKind::Function => &[TokenKind::OpeningFunctionBracket],

        TokenKind::OpeningFunctionBracket => AFTER_FUNCTION_OPEN,
    }
}

fn contains(kinds: &[TokenKind], kind: TokenKind) -> bool {
    kinds.iter().any(|&k| k == kind)
}

fn violation(token: &Token) -> String {
    format!("Unexpected token \"{}\" in line {}, column {}",
            token.value(),
            token.line(),
            token.column())
}

/// Validates token adjacency over a finished token sequence.
///
/// Checks that the first and last token may start and end an expression,
/// that every adjacent pair is allowed by the grammar tables, and that
/// commas only appear directly inside function brackets. The check is not
/// fail-fast: every violation found in one pass is returned, one
/// human-readable message per offending token, in source order.
///
/// An empty slice yields no violations; rejecting empty input is the
/// caller's concern.
///
/// # Example
/// ```
/// use mexpr::engine::{grammar, lexer};
///
/// let tokens = lexer::tokenize("3 2").unwrap();
/// let violations = grammar::check_grammar(&tokens);
/// assert_eq!(violations.len(), 1);
/// ```
#[must_use]
pub fn check_grammar(tokens: &[Token]) -> Vec<String> {
    let mut violations = Vec::new();

    let Some(first) = tokens.first() else {
        return violations;
    };

    if !contains(FIRST, first.kind()) {
        violations.push(violation(first));
    }

    // Tracks whether the innermost open bracket is a function bracket, so a
    // comma inside plain grouping brackets can be flagged.
    let mut bracket_kinds: Vec<bool> = Vec::new();

    for pair in tokens.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        match previous.kind() {
            TokenKind::OpeningBracket => bracket_kinds.push(false),
            TokenKind::OpeningFunctionBracket => bracket_kinds.push(true),
            TokenKind::ClosingBracket | TokenKind::ClosingFunctionBracket => {
                bracket_kinds.pop();
            },
            _ => {},
        }

        if !contains(successors(previous.kind()), current.kind()) {
            violations.push(violation(current));
        } else if current.kind() == TokenKind::CommaFunction
                  && bracket_kinds.last() != Some(&true)
        {
            violations.push(format!("{}. This token is only allowed inside function brackets",
                                    violation(current)));
        }
    }

    if let Some(last) = tokens.last() {
        if !contains(LAST, last.kind()) {
            violations.push(violation(last));
        }
    }

    violations
}
