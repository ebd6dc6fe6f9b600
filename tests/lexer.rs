use mexpr::{
    engine::lexer::tokenize,
    ParseError, TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind()).collect()
}

#[test]
fn tokenizes_literals_and_operators() {
    let tokens = tokenize("2 + 1 * 3 + 2").unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0].value(), "2");
    assert_eq!(tokens[1].kind(), TokenKind::ArithmeticOperator);
    assert_eq!(tokens[3].kind(), TokenKind::ArithmeticOperator);
    assert_eq!(tokens[3].value(), "*");
    assert!(tokens[6].is_literal());
}

#[test]
fn tokenizes_scientific_notation_as_one_literal() {
    let tokens = tokenize("1.92E+30").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::Literal);
    assert_eq!(tokens[0].value(), "1.92E+30");
}

#[test]
fn keeps_leading_sign_glued_at_expression_start() {
    let tokens = tokenize("-19.88 +76E+30").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind(), TokenKind::SignedLiteral);
    assert_eq!(tokens[0].value(), "-19.88");
    assert_eq!(tokens[1].kind(), TokenKind::ArithmeticOperator);
    assert_eq!(tokens[1].value(), "+");
    assert_eq!(tokens[2].kind(), TokenKind::Literal);
    assert_eq!(tokens[2].value(), "76E+30");
}

#[test]
fn splits_signs_that_follow_an_operand() {
    let tokens = tokenize("-12.33 +28+53").unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value()).collect();
    assert_eq!(values, ["-12.33", "+", "28", "+", "53"]);
}

#[test]
fn keeps_sign_glued_after_an_operator() {
    let tokens = tokenize("2+ +2").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind(), TokenKind::SignedLiteral);
    assert_eq!(tokens[2].value(), "+2");
}

#[test]
fn keeps_sign_glued_after_comparison_and_ternary_tokens() {
    assert_eq!(kinds("1 > -2"),
               [TokenKind::Literal, TokenKind::ComparisonOperator, TokenKind::SignedLiteral]);
    assert_eq!(kinds("1 ? -2 : -3"),
               [TokenKind::Literal,
                TokenKind::TernaryThen,
                TokenKind::SignedLiteral,
                TokenKind::TernaryElse,
                TokenKind::SignedLiteral]);
}

#[test]
fn distinguishes_function_and_grouping_brackets() {
    let tokens = tokenize("cos(2 * (1 + 1))").unwrap();

    assert_eq!(tokens[0].kind(), TokenKind::Function);
    assert_eq!(tokens[1].kind(), TokenKind::OpeningFunctionBracket);
    assert_eq!(tokens[4].kind(), TokenKind::OpeningBracket);
    assert_eq!(tokens[8].kind(), TokenKind::ClosingBracket);
    assert_eq!(tokens[9].kind(), TokenKind::ClosingFunctionBracket);
}

#[test]
fn classifies_bare_identifiers_as_variables() {
    let tokens = tokenize("pi + radius").unwrap();

    assert_eq!(tokens[0].kind(), TokenKind::Variable);
    assert_eq!(tokens[0].value(), "pi");
    assert_eq!(tokens[2].kind(), TokenKind::Variable);
    assert_eq!(tokens[2].value(), "radius");
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = tokenize("1 +\n 22").unwrap();

    assert_eq!(tokens[0].line(), 1);
    assert_eq!(tokens[0].column(), 0);
    assert_eq!(tokens[1].column(), 2);
    assert_eq!(tokens[2].line(), 2);
    assert_eq!(tokens[2].column(), 1);
    assert_eq!(tokens[2].position(), 5);
}

#[test]
fn rejects_malformed_literals() {
    let error = tokenize("4.217.3 + 1").unwrap_err();

    assert_eq!(error,
               ParseError::InvalidLiteral { literal: "4.217.".to_string(),
                                            line:    1,
                                            column:  0, });
}

#[test]
fn rejects_doubled_operators() {
    let error = tokenize("4++1").unwrap_err();

    assert_eq!(error,
               ParseError::InvalidOperator { operator: "++".to_string(),
                                             line:     1,
                                             column:   1, });
    assert!(matches!(tokenize("8//2").unwrap_err(), ParseError::InvalidOperator { .. }));
}

#[test]
fn rejects_unknown_characters() {
    let error = tokenize("2 # 3").unwrap_err();

    assert_eq!(error,
               ParseError::UnexpectedCharacter { character: '#',
                                                 line:      1,
                                                 column:    2, });
}

#[test]
fn rejects_unknown_function_names() {
    let error = tokenize("foo(2)").unwrap_err();

    assert_eq!(error,
               ParseError::UnknownFunction { name:   "foo".to_string(),
                                             line:   1,
                                             column: 0, });
}

#[test]
fn rejects_unbalanced_brackets() {
    assert_eq!(tokenize("(2 + 1").unwrap_err(),
               ParseError::UnclosedBracket { bracket: '(',
                                             line:    1,
                                             column:  0, });
    assert_eq!(tokenize("2 + 1)").unwrap_err(),
               ParseError::UnmatchedClosing { bracket: ')',
                                              line:    1,
                                              column:  5, });
}

#[test]
fn rejects_unbalanced_ternaries() {
    assert_eq!(tokenize("1 ? 2").unwrap_err(),
               ParseError::UnclosedBracket { bracket: '?',
                                             line:    1,
                                             column:  2, });
    assert_eq!(tokenize("1 : 2").unwrap_err(),
               ParseError::UnmatchedClosing { bracket: ':',
                                              line:    1,
                                              column:  2, });
    // The "?" opens inside the bracket, so its ":" cannot live outside it.
    assert!(matches!(tokenize("(1 ? 2) : 3").unwrap_err(),
                     ParseError::UnclosedBracket { bracket: '?', .. }));
}

#[test]
fn pairs_nested_ternaries_innermost_first() {
    let tokens = tokenize("1 ? 2 ? 3 : 4 : 5").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds,
               [TokenKind::Literal,
                TokenKind::TernaryThen,
                TokenKind::Literal,
                TokenKind::TernaryThen,
                TokenKind::Literal,
                TokenKind::TernaryElse,
                TokenKind::Literal,
                TokenKind::TernaryElse,
                TokenKind::Literal]);
}

#[test]
fn tokenizes_power_as_one_operator() {
    let tokens = tokenize("8**2").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind(), TokenKind::ArithmeticOperator);
    assert_eq!(tokens[1].value(), "**");
}

#[test]
fn returns_no_tokens_for_blank_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t\n ").unwrap().is_empty());
}
