use tracing::debug;

use crate::interpreter::{
    calculator::{apply_complex, apply_function, apply_mixed},
    flow::{
        core::{ComplexOperand, DoubleOperand, Flow, FlowProcessor, Menu, Operation},
        operation::{BinaryComplexOp, BinaryMixedOp, Function, MenuItem, OperationType},
    },
    lexer::Token,
    value::complex::ComplexNumber,
};

/// Description carried by the error state after a rejected line.
pub const INVALID_INPUT: &str = "Invalid Input";

/// A unary function applied to an operand, evaluated once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOutcome {
    operand:  ComplexNumber,
    function: Function,
    value:    f64,
}

impl UnaryOutcome {
    /// Evaluates `function` on `operand`.
    #[must_use]
    pub fn new(operand: ComplexNumber, function: Function) -> Self {
        Self { operand,
               function,
               value: apply_function(operand, function) }
    }

    /// The operand the function was applied to.
    #[must_use]
    pub const fn operand(&self) -> ComplexNumber {
        self.operand
    }

    /// The applied function.
    #[must_use]
    pub const fn function(&self) -> Function {
        self.function
    }

    /// The computed value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// A binary operation on two complex operands, evaluated once on
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexOutcome {
    operands:  (ComplexNumber, ComplexNumber),
    operation: BinaryComplexOp,
    value:     ComplexNumber,
}

impl ComplexOutcome {
    /// Evaluates `operation` on `operands`.
    #[must_use]
    pub fn new(operands: (ComplexNumber, ComplexNumber), operation: BinaryComplexOp) -> Self {
        Self { operands,
               operation,
               value: apply_complex(operands, operation) }
    }

    /// The left and right operands.
    #[must_use]
    pub const fn operands(&self) -> (ComplexNumber, ComplexNumber) {
        self.operands
    }

    /// The applied operation.
    #[must_use]
    pub const fn operation(&self) -> BinaryComplexOp {
        self.operation
    }

    /// The computed value.
    #[must_use]
    pub const fn value(&self) -> ComplexNumber {
        self.value
    }
}

/// A binary operation on a complex and a real operand, evaluated once on
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedOutcome {
    operands:  (ComplexNumber, f64),
    operation: BinaryMixedOp,
    value:     ComplexNumber,
}

impl MixedOutcome {
    /// Evaluates `operation` on `operands`.
    #[must_use]
    pub fn new(operands: (ComplexNumber, f64), operation: BinaryMixedOp) -> Self {
        Self { operands,
               operation,
               value: apply_mixed(operands, operation) }
    }

    /// The complex and real operands.
    #[must_use]
    pub const fn operands(&self) -> (ComplexNumber, f64) {
        self.operands
    }

    /// The applied operation.
    #[must_use]
    pub const fn operation(&self) -> BinaryMixedOp {
        self.operation
    }

    /// The computed value.
    #[must_use]
    pub const fn value(&self) -> ComplexNumber {
        self.value
    }
}

/// The current step of the conversation.
///
/// Exactly one state is alive during a session. It is replaced as a whole on
/// every turn by [`transition`] and carries the only memory kept between
/// turns: the operands and operation captured so far.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    /// Greeting and menu.
    #[default]
    Idle,
    /// Waiting for the first complex operand.
    AwaitingFirstOperand,
    /// Waiting for an operator or a function name.
    AwaitingOperatorOrFunction {
        /// The first operand.
        first: ComplexNumber,
    },
    /// Waiting for the complex right-hand side of `+` or `-`.
    AwaitingSecondComplexOperand {
        /// The first operand.
        first:     ComplexNumber,
        /// The chosen operation.
        operation: BinaryComplexOp,
    },
    /// Waiting for the real right-hand side of `*` or `/`.
    AwaitingSecondDoubleOperand {
        /// The first operand.
        first:     ComplexNumber,
        /// The chosen operation.
        operation: BinaryMixedOp,
    },
    /// Result of `modulus` or `arg`.
    UnaryResult(UnaryOutcome),
    /// Result of `+` or `-`.
    BinaryComplexResult(ComplexOutcome),
    /// Result of `*` or `/`.
    BinaryMixedResult(MixedOutcome),
    /// A line was rejected.
    ErrorState {
        /// What went wrong.
        description: String,
    },
    /// The user chose to exit.
    Terminated,
}

impl State {
    /// The error state produced by any rejected line.
    #[must_use]
    pub fn invalid_input() -> Self {
        Self::ErrorState { description: INVALID_INPUT.to_string() }
    }

    /// Returns `true` once the conversation is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    fn from_menu(item: MenuItem) -> Self {
        match item {
            MenuItem::Exit => Self::Terminated,
            MenuItem::Target => Self::AwaitingFirstOperand,
        }
    }

    fn from_operation(first: ComplexNumber, operation: OperationType) -> Self {
        match operation {
            OperationType::UnaryFunction(function) => {
                Self::UnaryResult(UnaryOutcome::new(first, function))
            },
            OperationType::BinaryComplex(operation) => {
                Self::AwaitingSecondComplexOperand { first, operation }
            },
            OperationType::BinaryMixed(operation) => {
                Self::AwaitingSecondDoubleOperand { first, operation }
            },
        }
    }
}

/// Computes the state that follows `state` after reading `tokens`.
///
/// The current state picks the flow the tokens are interpreted in. A
/// successful flow moves the conversation forward; a failed one always
/// yields the `Invalid Input` error state. `Terminated` never changes.
///
/// # Example
/// ```
/// use cplx::interpreter::{
///     lexer::tokenize,
///     state::core::{State, transition},
/// };
///
/// let state = transition(State::Idle, &tokenize("B"));
/// assert_eq!(state, State::AwaitingFirstOperand);
///
/// let state = transition(state, &tokenize("hello"));
/// assert_eq!(state, State::invalid_input());
/// ```
#[must_use]
pub fn transition(state: State, tokens: &[Token]) -> State {
    let processor = FlowProcessor;

    let next = match state {
        State::Terminated => return State::Terminated,
        State::Idle
        | State::UnaryResult(_)
        | State::BinaryComplexResult(_)
        | State::BinaryMixedResult(_)
        | State::ErrorState { .. } => {
            processor.process(Flow::<Menu>::new(tokens)).map(State::from_menu)
        },
        State::AwaitingFirstOperand => {
            processor.process(Flow::<ComplexOperand>::new(tokens))
                     .map(|first| State::AwaitingOperatorOrFunction { first })
        },
        State::AwaitingOperatorOrFunction { first } => {
            processor.process(Flow::<Operation>::new(tokens))
                     .map(|operation| State::from_operation(first, operation))
        },
        State::AwaitingSecondComplexOperand { first, operation } => {
            processor.process(Flow::<ComplexOperand>::new(tokens))
                     .map(|second| {
                         State::BinaryComplexResult(ComplexOutcome::new((first, second),
                                                                        operation))
                     })
        },
        State::AwaitingSecondDoubleOperand { first, operation } => {
            processor.process(Flow::<DoubleOperand>::new(tokens))
                     .map(|second| {
                         State::BinaryMixedResult(MixedOutcome::new((first, second), operation))
                     })
        },
    };

    match next {
        Ok(next) => {
            log_transition(&next);
            next
        },
        Err(error) => {
            debug!(%error, "line rejected");
            State::invalid_input()
        },
    }
}

fn log_transition(next: &State) {
    match next {
        State::UnaryResult(outcome) => {
            debug!(operand = %outcome.operand(),
                   function = %outcome.function(),
                   value = outcome.value(),
                   "evaluated function");
        },
        State::BinaryComplexResult(outcome) => {
            let (left, right) = outcome.operands();
            debug!(%left,
                   %right,
                   operation = %outcome.operation(),
                   value = %outcome.value(),
                   "evaluated complex operation");
        },
        State::BinaryMixedResult(outcome) => {
            let (left, right) = outcome.operands();
            debug!(%left,
                   right,
                   operation = %outcome.operation(),
                   value = %outcome.value(),
                   "evaluated mixed operation");
        },
        State::AwaitingSecondComplexOperand { first, operation } => {
            debug!(%first, %operation, "waiting for a complex operand");
        },
        State::AwaitingSecondDoubleOperand { first, operation } => {
            debug!(%first, %operation, "waiting for a real operand");
        },
        _ => debug!(?next, "transition"),
    }
}
