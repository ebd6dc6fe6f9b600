/// A binary operator with resolved semantics.
///
/// Comparison operators evaluate to `1.0` or `0.0`; the two spellings of
/// inequality, `!=` and `<>`, both map to [`BinaryOperator::NotEqual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `**`
    Pow,
    /// `==`
    Equal,
    /// `!=` and `<>`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

/// A node of the expression tree built from a validated token sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant, signed or not.
    Number {
        /// The parsed value.
        value: f64,
    },
    /// A reference resolved through the variable store at evaluation time.
    Variable {
        /// The variable name as written.
        name: String,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional, evaluating exactly one branch.
    Ternary {
        /// Decides the branch; any non-zero value selects `then_branch`.
        condition:   Box<Expr>,
        /// Evaluated when the condition is non-zero.
        then_branch: Box<Expr>,
        /// Evaluated when the condition is zero.
        else_branch: Box<Expr>,
    },
    /// A call to a built-in function.
    Call {
        /// The function name.
        name:   String,
        /// Argument expressions in call order.
        args:   Vec<Expr>,
        /// 1-based source line of the call.
        line:   usize,
        /// 0-based source column of the call.
        column: usize,
    },
}
