use crate::{
    error::FlowError,
    interpreter::{
        flow::{
            core::{ComplexOperand, DoubleOperand, FlowContext, FlowResult, Menu, Operation, filter},
            literal::{Literal, combine, evaluate},
            operation::{MenuItem, OperationType},
        },
        lexer::Token,
        value::complex::ComplexNumber,
    },
};

/// One or two number literals forming a complex value.
impl FlowContext for ComplexOperand {
    type Output = ComplexNumber;

    fn interpret(tokens: &[Token]) -> FlowResult<ComplexNumber> {
        let literals = filter(tokens, |token| matches!(token, Token::Number(_)), 1..=2)?
            .into_iter()
            .map(|token| evaluate(token.text()))
            .collect::<FlowResult<Vec<_>>>()?;

        combine(&literals)
    }
}

/// Exactly one real literal.
impl FlowContext for DoubleOperand {
    type Output = f64;

    fn interpret(tokens: &[Token]) -> FlowResult<f64> {
        let accepted = filter(tokens, |token| matches!(token, Token::Number(_)), 1..=1)?;

        match evaluate(accepted[0].text())? {
            Literal::Real(value) => Ok(value),
            Literal::Imaginary(_) => Err(FlowError::NonValidArg),
        }
    }
}

/// Exactly one operator or function name.
impl FlowContext for Operation {
    type Output = OperationType;

    fn interpret(tokens: &[Token]) -> FlowResult<OperationType> {
        let accepted = filter(tokens,
                              |token| matches!(token, Token::Operator(_) | Token::FunctionName(_)),
                              1..=1)?;

        let operation = match accepted[0] {
            Token::Operator(symbol) => OperationType::from_operator(symbol),
            Token::FunctionName(name) => OperationType::from_function_name(name),
            _ => None,
        };
        operation.ok_or(FlowError::NonValidArg)
    }
}

/// Exactly one menu choice.
impl FlowContext for Menu {
    type Output = MenuItem;

    fn interpret(tokens: &[Token]) -> FlowResult<MenuItem> {
        let accepted = filter(tokens, |token| matches!(token, Token::MenuChoice(_)), 1..=1)?;

        MenuItem::from_choice(accepted[0].text()).ok_or(FlowError::NonValidArg)
    }
}
