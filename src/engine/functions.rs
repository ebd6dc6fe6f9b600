use crate::error::RuntimeError;

/// Names callable from an expression.
///
/// Identifiers followed by `(` that are not listed here are rejected by the
/// lexer before grammar checking even starts.
pub const FUNCTIONS: [&str; 27] = ["abs", "acos", "acosh", "asin", "asinh", "atan2", "atan",
                                   "atanh", "ceil", "cos", "cosh", "deg2rad", "exp", "floor",
                                   "fmod", "hypot", "intdiv", "log", "log10", "pi", "pow",
                                   "round", "sin", "sinh", "sqrt", "tan", "tanh"];

/// Whether a name is in the function allow-list.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// Returns the exact number of arguments a function takes, or `None` for
/// names outside the allow-list.
#[must_use]
pub fn arity(name: &str) -> Option<usize> {
    match name {
        "pi" => Some(0),
        "atan2" | "fmod" | "hypot" | "intdiv" | "pow" => Some(2),
        _ if is_builtin(name) => Some(1),
        _ => None,
    }
}

/// Applies a built-in function to already-evaluated arguments.
///
/// The caller has verified the arity, so `args` has exactly the length
/// [`arity`] reports for `name`. Positions locate the call for the one error
/// a well-arity'd call can still raise, integer division by zero.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `intdiv` with a zero divisor.
/// - [`RuntimeError::UnknownFunction`] for names outside the allow-list,
///   which token sequences built by the lexer never produce.
pub fn call(name: &str, args: &[f64], line: usize, column: usize) -> Result<f64, RuntimeError> {
    let result = match name {
        "abs" => args[0].abs(),
        "acos" => args[0].acos(),
        "acosh" => args[0].acosh(),
        "asin" => args[0].asin(),
        "asinh" => args[0].asinh(),
        "atan" => args[0].atan(),
        "atan2" => args[0].atan2(args[1]),
        "atanh" => args[0].atanh(),
        "ceil" => args[0].ceil(),
        "cos" => args[0].cos(),
        "cosh" => args[0].cosh(),
        "deg2rad" => args[0].to_radians(),
        "exp" => args[0].exp(),
        "floor" => args[0].floor(),
        "fmod" => args[0] % args[1],
        "hypot" => args[0].hypot(args[1]),
        "intdiv" => {
            if args[1] == 0.0 {
                return Err(RuntimeError::DivisionByZero { line, column });
            }
            (args[0] / args[1]).trunc()
        },
        "log" => args[0].ln(),
        "log10" => args[0].log10(),
        "pi" => std::f64::consts::PI,
        "pow" => args[0].powf(args[1]),
        "round" => args[0].round(),
        "sin" => args[0].sin(),
        "sinh" => args[0].sinh(),
        "sqrt" => args[0].sqrt(),
        "tan" => args[0].tan(),
        "tanh" => args[0].tanh(),
        _ => return Err(RuntimeError::UnknownFunction { name: name.to_string() }),
    };

    Ok(result)
}
