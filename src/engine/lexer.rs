use logos::Logos;

use crate::{
    engine::{
        functions,
        token::{Token, TokenKind},
    },
    error::ParseError,
};

/// Raw lexical shapes recognized by the scanner.
///
/// The raw scan only finds token boundaries; classification into the final
/// [`TokenKind`]s (plain vs. function brackets, signed vs. operator-split
/// literals, ternary pairing) happens in a second pass over the spanned raw
/// tokens, where the needed context is available.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Numeric literal with an optional glued sign, in priority order:
    /// scientific notation, decimal, integer.
    #[regex(r"[+-]?([0-9]+|[0-9]*\.[0-9]+|[0-9]+\.[0-9]*)[eE][+-]?[0-9]+")]
    #[regex(r"[+-]?([0-9]*\.[0-9]+|[0-9]+\.[0-9]*)")]
    #[regex(r"[+-]?[0-9]+")]
    Number,
    /// Function or variable name.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,
    /// `**`
    #[token("**")]
    Power,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<>`
    #[token("<>")]
    LessGreater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equal,
    /// `!`
    #[token("!")]
    Bang,
}

/// Characters that may legally follow a numeric literal.
///
/// Anything else glued to the end of a literal makes it malformed, which
/// guards against inputs like `42.79.24` or `2e`. `?` and `:` are admitted
/// because the ternary markers count as operators.
const LITERAL_TERMINATORS: &[char] =
    &[' ', '\t', '\r', '\n', '\x0c', '<', '>', '!', '+', '-', '=', '/', ')', '%', '*', ',', '?',
      ':'];

/// Computes the 1-based line and 0-based column of a character offset.
///
/// Lines are separated by `\n`; `\r` is ignored for column counting, so
/// `\r\n` line endings behave like plain `\n`.
fn vertical_position(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;

    for ch in text[..offset].chars() {
        match ch {
            '\n' => {
                line += 1;
                column = 0;
            },
            '\r' => {},
            _ => column += 1,
        }
    }

    (line, column)
}

/// Creates tokens from a given expression.
///
/// Scans the text for well-formed tokens and classifies each into its final
/// [`TokenKind`]. Paired tokens are checked here (every `(` needs its `)`
/// and every ternary `?` its `:`, sensitive to bracket nesting), but no
/// grammar analysis of token adjacency is performed; that is the job of
/// [`crate::engine::grammar::check_grammar`].
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] for unclassifiable input.
/// - [`ParseError::InvalidLiteral`] for malformed numbers such as `42.79.24`.
/// - [`ParseError::InvalidOperator`] for doubled operators such as `++`.
/// - [`ParseError::UnknownFunction`] for call syntax with a name outside the
///   allow-list.
/// - [`ParseError::UnclosedBracket`] / [`ParseError::UnmatchedClosing`] for
///   bracket and ternary pairing failures.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let raw = scan(text)?;
    classify(text, &raw)
}

/// Runs the raw logos scan, attaching byte spans.
fn scan(text: &str) -> Result<Vec<(RawToken, std::ops::Range<usize>)>, ParseError> {
    let mut lexer = RawToken::lexer(text);
    let mut raw = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => raw.push((token, span)),
            Err(()) => {
                let (line, column) = vertical_position(text, span.start);
                return Err(ParseError::UnexpectedCharacter { character: text[span.start..]
                                                                            .chars()
                                                                            .next()
                                                                            .unwrap_or(' '),
                                                             line,
                                                             column });
            },
        }
    }

    Ok(raw)
}

/// Classifies raw tokens into final [`Token`]s.
///
/// Tracks two stacks: one for bracket pairing (with a plain/function flag
/// decided by the token preceding the opener) and one for ternary pairing,
/// which records the bracket depth each `?` was opened at so a `?` inside
/// nested parentheses never closes against an outer `:`.
fn classify(text: &str,
            raw: &[(RawToken, std::ops::Range<usize>)])
            -> Result<Vec<Token>, ParseError> {
    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut brackets: Vec<(usize, TokenKind)> = Vec::new();
    let mut ternaries: Vec<(usize, usize)> = Vec::new();

    for (index, (kind, span)) in raw.iter().enumerate() {
        let (line, column) = vertical_position(text, span.start);
        let slice = &text[span.clone()];

        match kind {
            RawToken::Number => {
                check_literal_terminator(text, span.end, slice, line, column)?;
                push_literal(&mut tokens, slice, span.start, line, column);
            },

            RawToken::Identifier => {
                let called = matches!(raw.get(index + 1), Some((RawToken::OpenParen, _)));
                if called {
                    if !functions::is_builtin(slice) {
                        return Err(ParseError::UnknownFunction { name: slice.to_string(),
                                                                 line,
                                                                 column });
                    }
                    tokens.push(Token::new(TokenKind::Function, slice, span.start, line, column));
                } else {
                    tokens.push(Token::new(TokenKind::Variable, slice, span.start, line, column));
                }
            },

            RawToken::OpenParen => {
                let function = matches!(tokens.last(), Some(t) if t.kind() == TokenKind::Function);
                let (opening, closing) = if function {
                    (TokenKind::OpeningFunctionBracket, TokenKind::ClosingFunctionBracket)
                } else {
                    (TokenKind::OpeningBracket, TokenKind::ClosingBracket)
                };
                brackets.push((span.start, closing));
                tokens.push(Token::new(opening, "(", span.start, line, column));
            },

            RawToken::CloseParen => {
                // A ternary opened inside the bracket being closed can no
                // longer find its ":".
                if let Some(&(offset, depth)) = ternaries.last() {
                    if depth == brackets.len() {
                        let (line, column) = vertical_position(text, offset);
                        return Err(ParseError::UnclosedBracket { bracket: '?', line, column });
                    }
                }
                match brackets.pop() {
                    Some((_, closing)) => {
                        tokens.push(Token::new(closing, ")", span.start, line, column));
                    },
                    None => {
                        return Err(ParseError::UnmatchedClosing { bracket: ')', line, column });
                    },
                }
            },

            RawToken::Question => {
                ternaries.push((span.start, brackets.len()));
                tokens.push(Token::new(TokenKind::TernaryThen, "?", span.start, line, column));
            },

            RawToken::Colon => {
                match ternaries.last() {
                    Some(&(_, depth)) if depth == brackets.len() => {
                        ternaries.pop();
                        tokens.push(Token::new(TokenKind::TernaryElse,
                                               ":",
                                               span.start,
                                               line,
                                               column));
                    },
                    _ => return Err(ParseError::UnmatchedClosing { bracket: ':', line, column }),
                }
            },

            RawToken::Comma => {
                tokens.push(Token::new(TokenKind::CommaFunction, ",", span.start, line, column));
            },

            RawToken::Plus | RawToken::Minus | RawToken::Star | RawToken::Slash
            | RawToken::Percent => {
                check_duplicate_operator(text, span.end, slice, line, column)?;
                tokens.push(Token::new(TokenKind::ArithmeticOperator,
                                       slice,
                                       span.start,
                                       line,
                                       column));
            },

            RawToken::Power => {
                tokens.push(Token::new(TokenKind::ArithmeticOperator,
                                       "**",
                                       span.start,
                                       line,
                                       column));
            },

            RawToken::EqualEqual | RawToken::BangEqual | RawToken::LessGreater
            | RawToken::LessEqual | RawToken::GreaterEqual | RawToken::Less
            | RawToken::Greater | RawToken::Equal | RawToken::Bang => {
                tokens.push(Token::new(TokenKind::ComparisonOperator,
                                       slice,
                                       span.start,
                                       line,
                                       column));
            },
        }
    }

    if let Some(&(offset, _)) = brackets.first() {
        let (line, column) = vertical_position(text, offset);
        return Err(ParseError::UnclosedBracket { bracket: '(', line, column });
    }
    if let Some(&(offset, _)) = ternaries.first() {
        let (line, column) = vertical_position(text, offset);
        return Err(ParseError::UnclosedBracket { bracket: '?', line, column });
    }

    Ok(tokens)
}

/// Rejects literals glued to characters that cannot terminate them,
/// e.g. the second dot in `42.79.24` or the `e` in `2e`.
fn check_literal_terminator(text: &str,
                            end: usize,
                            literal: &str,
                            line: usize,
                            column: usize)
                            -> Result<(), ParseError> {
    match text[end..].chars().next() {
        Some(next) if !LITERAL_TERMINATORS.contains(&next) => {
            Err(ParseError::InvalidLiteral { literal: format!("{literal}{next}"),
                                             line,
                                             column })
        },
        _ => Ok(()),
    }
}

/// Rejects doubled arithmetic operators such as `++`, `--`, `//`, or `%%`.
/// `**` never reaches this check; the raw scan already owns it.
fn check_duplicate_operator(text: &str,
                            end: usize,
                            operator: &str,
                            line: usize,
                            column: usize)
                            -> Result<(), ParseError> {
    match text[end..].chars().next() {
        Some(next) if operator.starts_with(next) => {
            Err(ParseError::InvalidOperator { operator: format!("{operator}{next}"),
                                              line,
                                              column })
        },
        _ => Ok(()),
    }
}

/// Pushes a literal, disambiguating a leading sign.
///
/// A sign-prefixed match stays one `SignedLiteral` unless the previous token
/// can end an operand (a literal, a closing bracket, or a variable), in
/// which case the sign is acting as a binary operator and the match is split
/// into an `ArithmeticOperator` token plus an unsigned `Literal` token.
fn push_literal(tokens: &mut Vec<Token>, slice: &str, position: usize, line: usize, column: usize) {
    let signed = slice.starts_with('+') || slice.starts_with('-');

    let split = signed
                && matches!(tokens.last(), Some(t) if matches!(t.kind(),
                       TokenKind::Literal
                       | TokenKind::SignedLiteral
                       | TokenKind::ClosingBracket
                       | TokenKind::ClosingFunctionBracket
                       | TokenKind::Variable));

    if split {
        tokens.push(Token::new(TokenKind::ArithmeticOperator,
                               &slice[..1],
                               position,
                               line,
                               column));
        tokens.push(Token::new(TokenKind::Literal, &slice[1..], position + 1, line, column + 1));
    } else if signed {
        tokens.push(Token::new(TokenKind::SignedLiteral, slice, position, line, column));
    } else {
        tokens.push(Token::new(TokenKind::Literal, slice, position, line, column));
    }
}
