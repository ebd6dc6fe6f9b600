use crate::{
    engine::{
        ast::{BinaryOperator, Expr},
        functions, parser,
        store::VariableStore,
        token::Token,
    },
    error::RuntimeError,
};

/// How deep variable resolution may nest.
///
/// The store guarantees acyclicity, so this caps legitimate chains of
/// variables referencing variables rather than breaking loops.
pub const MAX_RESOLUTION_DEPTH: usize = 50;

/// Evaluates a token sequence to a number.
///
/// Builds the expression tree and walks it. Variables resolve through the
/// store at the moment their node is reached: the bound tokens are parsed
/// and evaluated in place, one nesting level deeper. Ternary conditionals
/// evaluate exactly one branch.
///
/// Arithmetic follows IEEE 754: `1 / 0` is infinity, not an error, and `%`
/// takes the sign of the dividend. Comparisons yield `1.0` or `0.0`.
///
/// # Errors
/// - Everything [`parser::build`] raises, for the sequence itself and for
///   every variable binding resolved along the way.
/// - [`RuntimeError::UnknownVariable`] for references to unbound names.
/// - [`RuntimeError::RecursionLimit`] when resolution nests deeper than
///   [`MAX_RESOLUTION_DEPTH`].
/// - [`RuntimeError::DivisionByZero`] from `intdiv`.
///
/// # Example
/// ```
/// use mexpr::engine::{evaluator, lexer, store::VariableStore};
///
/// let tokens = lexer::tokenize("2 + 1 * 3 + 2").unwrap();
/// let result = evaluator::evaluate(&tokens, &VariableStore::new()).unwrap();
/// assert_eq!(result, 7.0);
/// ```
pub fn evaluate(tokens: &[Token], store: &VariableStore) -> Result<f64, RuntimeError> {
    let expr = parser::build(tokens)?;
    eval_expr(&expr, store, 0)
}

fn eval_expr(expr: &Expr, store: &VariableStore, depth: usize) -> Result<f64, RuntimeError> {
    match expr {
        Expr::Number { value } => Ok(*value),

        Expr::Variable { name } => {
            if depth >= MAX_RESOLUTION_DEPTH {
                return Err(RuntimeError::RecursionLimit { limit: MAX_RESOLUTION_DEPTH });
            }
            let tokens = store.get(name)?;
            let resolved = parser::build(&tokens)?;
            eval_expr(&resolved, store, depth + 1)
        },

        Expr::Binary { left, op, right } => {
            let left = eval_expr(left, store, depth)?;
            let right = eval_expr(right, store, depth)?;
            Ok(apply(*op, left, right))
        },

        Expr::Ternary { condition, then_branch, else_branch } => {
            let condition = eval_expr(condition, store, depth)?;
            if condition != 0.0 {
                eval_expr(then_branch, store, depth)
            } else {
                eval_expr(else_branch, store, depth)
            }
        },

        Expr::Call { name, args, line, column } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_expr(arg, store, depth)?);
            }
            functions::call(name, &values, *line, *column)
        },
    }
}

fn apply(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Rem => left % right,
        BinaryOperator::Pow => left.powf(right),
        BinaryOperator::Equal => bool_to_f64(left == right),
        BinaryOperator::NotEqual => bool_to_f64(left != right),
        BinaryOperator::Less => bool_to_f64(left < right),
        BinaryOperator::Greater => bool_to_f64(left > right),
        BinaryOperator::LessEqual => bool_to_f64(left <= right),
        BinaryOperator::GreaterEqual => bool_to_f64(left >= right),
    }
}

const fn bool_to_f64(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
