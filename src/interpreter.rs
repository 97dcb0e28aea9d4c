/// The calculator module applies operations to captured operands.
///
/// It maps unary functions and binary operations onto the arithmetic of
/// [`value::complex::ComplexNumber`]. Result states call into it exactly once,
/// when they are constructed.
pub mod calculator;
/// The flow module interprets token sequences in a given context.
///
/// A flow pairs the tokens of one input line with the context the
/// conversation currently expects: a complex operand, a real operand, an
/// operation or a menu choice. Each context has one rule that validates the
/// tokens and produces a typed value.
///
/// # Responsibilities
/// - Skips whitespace and rejects tokens of unexpected kinds.
/// - Enforces the token count each context accepts.
/// - Evaluates number literals and builds complex operands.
/// - Reports every failure as the single `non valid arg` error.
pub mod flow;
/// The lexer module tokenizes input lines.
///
/// The lexer reads one raw line and produces an ordered sequence of
/// classified tokens: numbers, operators, function names, whitespace and menu
/// choices. It never fails; whatever cannot be classified ends up in a
/// trailing `Unrecognized` token.
///
/// # Responsibilities
/// - Covers every character of the line with exactly one token.
/// - Matches greedily, longest classifiable slice first.
/// - Splits a sign glued to a preceding number off real literals.
pub mod lexer;
/// The state module drives the conversation.
///
/// It holds the closed set of conversation states, the transition function
/// that consults the flow each state expects, and the prompt text rendered
/// for each state.
///
/// # Responsibilities
/// - Picks the flow to run from the current state.
/// - Moves to the next state, or to the error state on failure.
/// - Evaluates results once, when a result state is entered.
pub mod state;
/// The value module defines the numeric types of the calculator.
pub mod value;
