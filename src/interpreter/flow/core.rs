use std::{marker::PhantomData, ops::RangeInclusive};

use tracing::warn;

use crate::{error::FlowError, interpreter::lexer::Token};

/// Result type used by the flow processor.
///
/// Every rule returns either the interpreted value or
/// [`FlowError::NonValidArg`]. Use `.ok()` to observe the value as present or
/// absent.
pub type FlowResult<T> = Result<T, FlowError>;

/// Context marker: a complex operand such as `2+i2` or `-i1.5`.
#[derive(Debug, Clone, Copy)]
pub struct ComplexOperand;
/// Context marker: a real operand such as `-2.222`.
#[derive(Debug, Clone, Copy)]
pub struct DoubleOperand;
/// Context marker: an operator or function name.
#[derive(Debug, Clone, Copy)]
pub struct Operation;
/// Context marker: a menu choice.
#[derive(Debug, Clone, Copy)]
pub struct Menu;

/// A context a token sequence can be interpreted in.
///
/// Each context marker implements this trait with the rule that validates
/// the tokens and produces its typed output.
pub trait FlowContext {
    /// The value a successful interpretation yields.
    type Output;

    /// Validates and interprets `tokens` in this context.
    ///
    /// # Errors
    /// Returns [`FlowError::NonValidArg`] when the tokens do not fit.
    fn interpret(tokens: &[Token]) -> FlowResult<Self::Output>;
}

/// A token sequence tagged with the context it will be interpreted against.
///
/// A flow carries no state of its own. It is built once per turn and
/// consumed by [`FlowProcessor::process`].
#[derive(Debug)]
pub struct Flow<'a, C> {
    tokens:  &'a [Token],
    context: PhantomData<C>,
}

impl<'a, C: FlowContext> Flow<'a, C> {
    /// Tags `tokens` with the context `C`.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               context: PhantomData }
    }
}

/// Interprets flows into typed values.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowProcessor;

impl FlowProcessor {
    /// Interprets the flow with the rule of its context.
    ///
    /// # Errors
    /// Returns [`FlowError::NonValidArg`] when the tokens do not fit the
    /// context.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::{
    ///     flow::{
    ///         core::{Flow, FlowProcessor, Menu},
    ///         operation::MenuItem,
    ///     },
    ///     lexer::tokenize,
    /// };
    ///
    /// let tokens = tokenize(" b ");
    /// let item = FlowProcessor.process(Flow::<Menu>::new(&tokens));
    /// assert_eq!(item, Ok(MenuItem::Target));
    /// ```
    pub fn process<C: FlowContext>(&self, flow: Flow<'_, C>) -> FlowResult<C::Output> {
        C::interpret(flow.tokens)
    }
}

/// Keeps the tokens accepted by `accept`, skipping whitespace.
///
/// Fails when the sequence is empty, when a token that is neither accepted
/// nor whitespace shows up, or when the number of accepted tokens falls
/// outside `count`.
pub(crate) fn filter<'a>(tokens: &'a [Token],
                         accept: impl Fn(&Token) -> bool,
                         count: RangeInclusive<usize>)
                         -> FlowResult<Vec<&'a Token>> {
    if tokens.is_empty() {
        return Err(FlowError::NonValidArg);
    }

    let mut accepted = Vec::with_capacity(tokens.len());
    for token in tokens {
        if accept(token) {
            accepted.push(token);
        } else if !matches!(token, Token::Whitespace(_)) {
            warn!(?token, "unexpected token in flow");
            return Err(FlowError::NonValidArg);
        }
    }

    if !count.contains(&accepted.len()) {
        warn!(accepted = accepted.len(), expected = ?count, "wrong number of tokens in flow");
        return Err(FlowError::NonValidArg);
    }

    Ok(accepted)
}
