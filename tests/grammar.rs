use mexpr::engine::{grammar::check_grammar, lexer::tokenize};

fn violations(source: &str) -> Vec<String> {
    check_grammar(&tokenize(source).unwrap())
}

#[test]
fn accepts_well_formed_expressions() {
    assert!(violations("2 + 1 * 3 + 2").is_empty());
    assert!(violations("(2 + 1) * (3 + 2)").is_empty());
    assert!(violations("8 ** 2 / -2").is_empty());
    assert!(violations("cos(pi() / 4)").is_empty());
    assert!(violations("atan2(1, 2)").is_empty());
    assert!(violations("pi()").is_empty());
    assert!(violations("units > 10 ? base * 0.9 : base").is_empty());
    assert!(violations("-5 % 3").is_empty());
}

#[test]
fn flags_adjacent_operands() {
    let found = violations("3 2");

    assert_eq!(found, ["Unexpected token \"2\" in line 1, column 2"]);
}

#[test]
fn flags_a_function_directly_after_a_literal() {
    let found = violations("3 pi()");

    assert_eq!(found, ["Unexpected token \"pi\" in line 1, column 2"]);
}

#[test]
fn flags_adjacent_comparison_operators() {
    let found = violations("33 >> 44");

    assert_eq!(found, ["Unexpected token \">\" in line 1, column 4"]);
}

#[test]
fn flags_a_leading_operator() {
    let found = violations("* 2");

    assert_eq!(found[0], "Unexpected token \"*\" in line 1, column 0");
}

#[test]
fn flags_a_trailing_operator() {
    let found = violations("2 +");

    assert_eq!(found, ["Unexpected token \"+\" in line 1, column 2"]);
}

#[test]
fn flags_commas_outside_function_brackets() {
    let found = violations("(1, 2)");

    assert_eq!(found,
               ["Unexpected token \",\" in line 1, column 2. This token is only allowed inside \
                 function brackets"]);
}

#[test]
fn allows_commas_in_function_brackets_only_at_the_call_level() {
    assert!(violations("pow(2, 3)").is_empty());

    let found = violations("pow((1, 2), 3)");
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("This token is only allowed inside function brackets"));
}

#[test]
fn collects_every_violation_in_one_pass() {
    let found = violations("3 2 1");

    assert_eq!(found,
               ["Unexpected token \"2\" in line 1, column 2",
                "Unexpected token \"1\" in line 1, column 4"]);
}

#[test]
fn reports_positions_across_lines() {
    let found = violations("1 +\n+ 2");

    assert_eq!(found, ["Unexpected token \"+\" in line 2, column 0"]);
}

#[test]
fn accepts_an_empty_token_sequence() {
    assert!(check_grammar(&[]).is_empty());
}
