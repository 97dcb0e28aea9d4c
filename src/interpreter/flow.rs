/// Flows, context markers and the flow processor.
///
/// A [`core::Flow`] pairs a token sequence with the context it should be read
/// in. The [`core::FlowProcessor`] dispatches on that context and returns the
/// typed value or a [`crate::error::FlowError`].
pub mod core;
/// Evaluation of number literals.
///
/// Turns `Number` token text into real or imaginary magnitudes and combines
/// them into complex operands.
pub mod literal;
/// Operations, functions and menu items produced by flows.
pub mod operation;
/// The four interpretation rules, one per context marker.
pub mod rules;
