use std::{iter::Peekable, slice::Iter};

use crate::{
    engine::{
        ast::{BinaryOperator, Expr},
        functions,
        token::{Token, TokenKind},
    },
    error::RuntimeError,
};

type Tokens<'a> = Peekable<Iter<'a, Token>>;

/// Builds an expression tree from a token sequence.
///
/// The sequence is expected to have passed grammar validation, but the
/// parser still fails cleanly on malformed input rather than panicking.
/// Precedence, lowest first: ternary conditional, comparison, additive,
/// multiplicative, power. The ternary conditional and `**` associate to the
/// right, everything else to the left.
///
/// # Errors
/// - [`RuntimeError::NothingToEvaluate`] for an empty sequence.
/// - [`RuntimeError::TrailingTokens`] when tokens remain after a complete
///   expression.
/// - [`RuntimeError::UnsupportedOperator`] for comparison spellings that lex
///   but cannot be evaluated, such as a single `=` or `!`.
/// - [`RuntimeError::ArgumentCount`] when a function call has the wrong
///   number of arguments.
/// - [`RuntimeError::UnexpectedToken`] / [`RuntimeError::UnexpectedEndOfInput`]
///   for sequences no grammar-checked input produces.
pub fn build(tokens: &[Token]) -> Result<Expr, RuntimeError> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(RuntimeError::NothingToEvaluate);
    }

    let expr = parse_ternary(&mut iter)?;

    match iter.next() {
        None => Ok(expr),
        Some(extra) => Err(RuntimeError::TrailingTokens { value:  extra.value().to_string(),
                                                          line:   extra.line(),
                                                          column: extra.column(), }),
    }
}

fn parse_ternary(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let condition = parse_comparison(iter)?;

    if matches!(iter.peek(), Some(t) if t.kind() == TokenKind::TernaryThen) {
        iter.next();
        let then_branch = parse_ternary(iter)?;
        expect(iter, TokenKind::TernaryElse)?;
        let else_branch = parse_ternary(iter)?;

        return Ok(Expr::Ternary { condition:   Box::new(condition),
                                  then_branch: Box::new(then_branch),
                                  else_branch: Box::new(else_branch), });
    }

    Ok(condition)
}

fn parse_comparison(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let mut left = parse_additive(iter)?;

    while let Some(token) = iter.peek() {
        if token.kind() != TokenKind::ComparisonOperator {
            break;
        }

        let op = match token.value() {
            "==" => BinaryOperator::Equal,
            "!=" | "<>" => BinaryOperator::NotEqual,
            "<" => BinaryOperator::Less,
            ">" => BinaryOperator::Greater,
            "<=" => BinaryOperator::LessEqual,
            ">=" => BinaryOperator::GreaterEqual,
            other => {
                return Err(RuntimeError::UnsupportedOperator { operator: other.to_string(),
                                                               line:     token.line(),
                                                               column:   token.column(), })
            },
        };
        iter.next();

        let right = parse_additive(iter)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }

    Ok(left)
}

fn parse_additive(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let mut left = parse_multiplicative(iter)?;

    while let Some(op) = peek_arithmetic(iter, &[("+", BinaryOperator::Add),
                                                 ("-", BinaryOperator::Sub)])
    {
        iter.next();
        let right = parse_multiplicative(iter)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }

    Ok(left)
}

fn parse_multiplicative(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let mut left = parse_power(iter)?;

    while let Some(op) = peek_arithmetic(iter, &[("*", BinaryOperator::Mul),
                                                 ("/", BinaryOperator::Div),
                                                 ("%", BinaryOperator::Rem)])
    {
        iter.next();
        let right = parse_power(iter)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }

    Ok(left)
}

fn parse_power(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let base = parse_atom(iter)?;

    // Right-associative, so recurse instead of looping.
    if peek_arithmetic(iter, &[("**", BinaryOperator::Pow)]).is_some() {
        iter.next();
        let exponent = parse_power(iter)?;
        return Ok(Expr::Binary { left:  Box::new(base),
                                 op:    BinaryOperator::Pow,
                                 right: Box::new(exponent), });
    }

    Ok(base)
}

fn parse_atom(iter: &mut Tokens<'_>) -> Result<Expr, RuntimeError> {
    let Some(token) = iter.next() else {
        return Err(RuntimeError::UnexpectedEndOfInput);
    };

    match token.kind() {
        TokenKind::Literal | TokenKind::SignedLiteral => {
            match token.value().parse::<f64>() {
                Ok(value) => Ok(Expr::Number { value }),
                Err(_) => Err(unexpected(token)),
            }
        },

        TokenKind::Variable => Ok(Expr::Variable { name: token.value().to_string() }),

        TokenKind::OpeningBracket => {
            let inner = parse_ternary(iter)?;
            expect(iter, TokenKind::ClosingBracket)?;
            Ok(inner)
        },

        TokenKind::Function => parse_call(iter, token),

        _ => Err(unexpected(token)),
    }
}

/// Parses the bracketed argument list of a function call and checks the
/// arity. Arguments are built depth-first, so a bad inner call is reported
/// before the arity of the outer one is looked at.
fn parse_call(iter: &mut Tokens<'_>, function: &Token) -> Result<Expr, RuntimeError> {
    expect(iter, TokenKind::OpeningFunctionBracket)?;

    let mut args = Vec::new();

    if matches!(iter.peek(), Some(t) if t.kind() == TokenKind::ClosingFunctionBracket) {
        iter.next();
    } else {
        loop {
            args.push(parse_ternary(iter)?);

            match iter.next() {
                Some(t) if t.kind() == TokenKind::CommaFunction => {},
                Some(t) if t.kind() == TokenKind::ClosingFunctionBracket => break,
                Some(t) => return Err(unexpected(t)),
                None => return Err(RuntimeError::UnexpectedEndOfInput),
            }
        }
    }

    let name = function.value();
    let expected = functions::arity(name)
        .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

    if args.len() != expected {
        return Err(RuntimeError::ArgumentCount { name: name.to_string(),
                                                 expected,
                                                 found: args.len(),
                                                 line: function.line(),
                                                 column: function.column() });
    }

    Ok(Expr::Call { name:   name.to_string(),
                    args,
                    line:   function.line(),
                    column: function.column(), })
}

fn peek_arithmetic(iter: &mut Tokens<'_>,
                   table: &[(&str, BinaryOperator)])
                   -> Option<BinaryOperator> {
    let token = iter.peek()?;
    if token.kind() != TokenKind::ArithmeticOperator {
        return None;
    }
    table.iter()
         .find(|(spelling, _)| *spelling == token.value())
         .map(|&(_, op)| op)
}

fn expect(iter: &mut Tokens<'_>, kind: TokenKind) -> Result<(), RuntimeError> {
    match iter.next() {
        Some(token) if token.kind() == kind => Ok(()),
        Some(token) => Err(unexpected(token)),
        None => Err(RuntimeError::UnexpectedEndOfInput),
    }
}

fn unexpected(token: &Token) -> RuntimeError {
    RuntimeError::UnexpectedToken { value:  token.value().to_string(),
                                    line:   token.line(),
                                    column: token.column(), }
}
