/// Conversation states and the transition function.
///
/// Holds the [`core::State`] enum, the result records evaluated when a
/// result state is entered, and [`core::transition`], which feeds a line's
/// tokens to the flow the current state expects.
pub mod core;
/// Prompt text for every state.
///
/// Rendering is a pure function of the state's own data; it never evaluates
/// anything again.
pub mod render;
