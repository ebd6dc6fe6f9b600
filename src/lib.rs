//! A safe evaluator for textual math expressions, without a host
//! interpreter.
//!
//! Expression text goes through a fixed pipeline: a lexer turns it into
//! classified, position-tagged tokens, a grammar validator checks token
//! adjacency and collects every violation at once, and an evaluator builds
//! an expression tree and walks it to an `f64`. Variables hold expression
//! text of their own and resolve lazily at evaluation time, with cycle
//! detection on every binding.
//!
//! The operator set covers `+ - * / % **`, comparisons evaluating to `1` or
//! `0`, the ternary conditional `? :`, and a fixed allow-list of math
//! functions such as `sqrt`, `cos`, and `pi`. Nothing outside that surface
//! is ever interpreted, which makes the engine safe for expression strings
//! from untrusted sources.
//!
//! # Example
//! ```
//! use mexpr::Expression;
//!
//! let mut expression = Expression::parse("units > 10 ? base * 0.9 : base")?;
//! expression.set_variable("units", "12")?
//!           .set_variable("base", "200")?;
//! assert_eq!(expression.evaluate()?, 180.0);
//! # Ok::<(), mexpr::Error>(())
//! ```
#![warn(clippy::redundant_clone,
        clippy::needless_pass_by_value,
        clippy::similar_names,
        clippy::large_enum_variant,
        clippy::string_lit_as_bytes,
        clippy::match_same_arms,
        clippy::cargo,
        clippy::nursery,
        clippy::perf,
        clippy::style,
        clippy::suspicious,
        clippy::correctness,
        clippy::complexity,
        clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// The expression pipeline: token definitions, the lexer, the grammar
/// validator, the variable store, and the tree-walking evaluator.
pub mod engine;
/// Everything that can go wrong, split into parse time and run time.
pub mod error;
/// The user-facing [`Expression`] type tying the pipeline together.
pub mod expression;

pub use engine::{
    evaluator::MAX_RESOLUTION_DEPTH,
    functions::FUNCTIONS,
    store::VariableStore,
    token::{Token, TokenKind},
};
pub use error::{Error, ParseError, RuntimeError};
pub use expression::Expression;
