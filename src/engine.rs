/// Defines the abstract syntax tree for evaluation.
///
/// Declares the `Expr` enum built by the token parser and walked by the
/// evaluator, together with the operator enums it carries.
pub mod ast;
/// Evaluates an expression tree to a numeric result.
///
/// Walks the AST with explicit operator semantics, resolving variable nodes
/// through the store with a bounded nesting depth.
pub mod evaluator;
/// The fixed function allow-list, arities, and numeric implementations.
pub mod functions;
/// Validates token adjacency over a finished token sequence.
///
/// Owns the compile-time grammar tables and the comma-scoping check. The
/// validator is not fail-fast: it collects every violation in one pass.
pub mod grammar;
/// Turns expression text into classified, position-tagged tokens.
pub mod lexer;
/// Builds an expression tree from a validated token sequence.
pub mod parser;
/// Named variable bindings with whole-store cycle detection.
pub mod store;
/// The position-tagged lexical unit shared by the whole pipeline.
pub mod token;
