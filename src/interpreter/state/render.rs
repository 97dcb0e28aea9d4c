use std::fmt::Display;

use crate::interpreter::{state::core::State, value::complex::format_fixed};

const GREETING: &str = "Hey, this is binary calculator working with complex numbers";
const REAL_GRAMMAR_INFO: &str = "The real part of complex number is an integer value";
const IMAGINARY_GRAMMAR_INFO: &str =
    "The imaginary part of complex number is an \"i\" letter following by integer value";
const EXAMPLES_INFO: &str = r#"Examples: "2+i2", "-i2 -2.222", "2.222", "-i1.2""#;
const BINARY_OPERATION_INFO: &str = r#"You can type these operations: "+", "-", "*", "/""#;
const METHOD_INFO: &str = r#"You can type these methods: "modulus", "arg""#;
const OPERATION_PROMPT: &str = "Type in order to go on the flow: ";
const DOUBLE_OPERAND_INFO: &str =
    "You chose operation which second operand should be double.\nPlease, type double number: ";
const RESULT_INFO: &str = "Your result: ";
const FAREWELL: &str = "Bye\n";

fn menu(target: &str) -> String {
    format!("Menu:\n A - Exit\n B - {target}\n Type: ")
}

fn operand_info() -> String {
    format!("{REAL_GRAMMAR_INFO}\n{IMAGINARY_GRAMMAR_INFO}\n{EXAMPLES_INFO}\nType complex number: ")
}

fn with_menu(head: &str) -> String {
    format!("{head}\n{}\n", menu("First operand"))
}

impl State {
    /// Returns the prompt shown while this state is current.
    ///
    /// The text depends only on the state's own data. Result states show the
    /// value computed when they were entered, so describing the same state
    /// twice gives the same text.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::{
    ///     flow::operation::BinaryComplexOp,
    ///     state::core::{ComplexOutcome, State},
    ///     value::complex::ComplexNumber,
    /// };
    ///
    /// let state = State::BinaryComplexResult(ComplexOutcome::new((ComplexNumber::new(2.0, 2.0),
    ///                                                             ComplexNumber::new(1.0, -1.0)),
    ///                                                            BinaryComplexOp::Add));
    /// assert!(state.describe().starts_with("Your result: 3.000000+i1.000000\n"));
    /// assert_eq!(state.describe(), state.describe());
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Idle => with_menu(GREETING),
            Self::AwaitingFirstOperand | Self::AwaitingSecondComplexOperand { .. } => {
                operand_info()
            },
            Self::AwaitingOperatorOrFunction { .. } => {
                format!("{BINARY_OPERATION_INFO}\n{METHOD_INFO}\n{OPERATION_PROMPT}")
            },
            Self::AwaitingSecondDoubleOperand { .. } => DOUBLE_OPERAND_INFO.to_string(),
            Self::UnaryResult(outcome) => {
                with_menu(&format!("{RESULT_INFO}{}", format_fixed(outcome.value())))
            },
            Self::BinaryComplexResult(outcome) => {
                with_menu(&format!("{RESULT_INFO}{}", outcome.value()))
            },
            Self::BinaryMixedResult(outcome) => {
                with_menu(&format!("{RESULT_INFO}{}", outcome.value()))
            },
            Self::ErrorState { description } => with_menu(&format!("Error:{description}")),
            Self::Terminated => FAREWELL.to_string(),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
