use thiserror::Error;

/// Represents the failure of a flow rule.
///
/// Every rule reports the same error regardless of the cause: an unexpected
/// token kind, a token count outside the accepted range, or an operand built
/// from two literals of the same kind. Callers only observe success or
/// absence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// The tokens do not form a valid argument for the requested context.
    #[error("non valid arg")]
    NonValidArg,
}
