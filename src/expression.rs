use std::str::FromStr;

use crate::{
    engine::{evaluator, grammar, lexer, store::VariableStore, token::Token},
    error::{Error, ParseError},
};

/// A parsed math expression with its own variable bindings.
///
/// The expression text is validated eagerly: lexing and grammar checking
/// happen when the text is set, so an `Expression` always holds a
/// well-formed token sequence. Evaluation is deferred and repeatable; the
/// same expression can be evaluated any number of times, with variables
/// rebound in between.
///
/// # Example
/// ```
/// use mexpr::Expression;
///
/// let mut expression = Expression::parse("(price - discount) * units")?;
/// expression.set_variable("price", "10")?
///           .set_variable("discount", "2.5")?
///           .set_variable("units", "4")?;
/// assert_eq!(expression.evaluate()?, 30.0);
/// # Ok::<(), mexpr::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens:    Vec<Token>,
    variables: VariableStore,
}

impl Expression {
    /// Creates an expression with no text and no variables. Set text with
    /// [`Expression::set_expression`] before evaluating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expression from text.
    ///
    /// # Errors
    /// Any [`ParseError`], wrapped in [`Error::Parse`], when the text does
    /// not lex or fails grammar validation.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut expression = Self::new();
        expression.set_expression(text)?;
        Ok(expression)
    }

    /// Replaces the expression text, keeping the variable bindings.
    ///
    /// # Errors
    /// Any [`ParseError`], wrapped in [`Error::Parse`], when the text does
    /// not lex or fails grammar validation. The previous text is kept in
    /// that case.
    pub fn set_expression(&mut self, text: &str) -> Result<&mut Self, Error> {
        self.tokens = anatomize(text)?;
        Ok(self)
    }

    /// Binds a variable to its own expression text.
    ///
    /// The text goes through the same lexing and grammar validation as the
    /// main expression and may reference other variables, bound or not yet
    /// bound. Returns `&mut Self` so bindings chain.
    ///
    /// # Errors
    /// - Any [`ParseError`], wrapped in [`Error::Parse`], when the text does
    ///   not lex or fails grammar validation.
    /// - [`crate::RuntimeError::InvalidVariableName`] or
    ///   [`crate::RuntimeError::CircularReference`], wrapped in
    ///   [`Error::Runtime`], from the store. The bindings are left unchanged
    ///   on either.
    pub fn set_variable(&mut self, name: &str, text: &str) -> Result<&mut Self, Error> {
        let tokens = anatomize(text)?;
        self.variables.set(name, tokens)?;
        Ok(self)
    }

    /// Returns the text a variable is bound to, rebuilt from its tokens with
    /// single spaces between them.
    ///
    /// # Errors
    /// [`crate::RuntimeError::UnknownVariable`], wrapped in
    /// [`Error::Runtime`], when the name is not bound.
    pub fn get_variable(&self, name: &str) -> Result<String, Error> {
        let tokens = self.variables.get(name)?;
        Ok(tokens.iter()
                 .map(Token::value)
                 .collect::<Vec<_>>()
                 .join(" "))
    }

    /// Removes a variable binding, reporting whether it existed.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        self.variables.remove(name)
    }

    /// Removes every variable binding.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// The validated tokens of the expression text.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The variable bindings.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Evaluates the expression to a number.
    ///
    /// # Errors
    /// - [`crate::RuntimeError::NothingToEvaluate`], wrapped in
    ///   [`Error::Runtime`], when no expression text is set.
    /// - Everything evaluation can raise: unbound variables, resolution
    ///   nesting beyond the maximum, unsupported operators, wrong argument
    ///   counts, and integer division by zero.
    pub fn evaluate(&self) -> Result<f64, Error> {
        let result = evaluator::evaluate(&self.tokens, &self.variables)?;
        Ok(result)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Lexes and validates expression text into tokens.
fn anatomize(text: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = lexer::tokenize(text)?;

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let violations = grammar::check_grammar(&tokens);
    if !violations.is_empty() {
        return Err(ParseError::Grammar { violations });
    }

    Ok(tokens)
}
