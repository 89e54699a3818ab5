/// The context module holds the variable environment.
///
/// The context maps variable names to their current `f64` values. It is
/// seeded with a table of named constants when a session starts and is
/// mutated only by the assignment production in the parser.
///
/// # Responsibilities
/// - Stores every variable binding for the lifetime of a session.
/// - Resolves reads, inserting a zero binding for names never assigned.
pub mod context;
/// The lexer module turns raw input characters into tokens.
///
/// The lexer reads one character at a time from a blocking source and
/// produces tokens on demand: numbers, identifiers, and the fixed operator
/// and punctuation set. It provides one token of pushback for the parser's
/// lookahead and a raw skip operation for error recovery.
///
/// # Responsibilities
/// - Classifies characters into tokens, scanning full numeric literals and
///   identifiers.
/// - Maintains the single-token pushback slot and its overflow contract.
/// - Resynchronizes the stream on a marker character after an error.
pub mod lexer;
/// The parser module evaluates expressions while parsing them.
///
/// Three mutually recursive precedence levels read tokens and compute `f64`
/// results directly; no syntax tree is built. Assignments encountered inside
/// an expression write into the context immediately.
///
/// # Responsibilities
/// - Implements precedence and left-associativity for `+ - * / %` and the
///   tightest-binding unary minus.
/// - Evaluates parenthesized groups, literals, variable reads and
///   assignments.
/// - Reports division and remainder by zero.
pub mod parser;
