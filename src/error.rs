/// Flow interpretation errors.
///
/// Defines the single failure a flow rule can report when a token sequence
/// does not fit the context it is interpreted against.
pub mod flow_error;
/// Session errors.
///
/// Contains the errors raised by the line-in, text-out session driver: failed
/// reads or writes and script files that cannot be opened.
pub mod session_error;

pub use flow_error::FlowError;
pub use session_error::SessionError;
