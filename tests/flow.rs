use cplx::{
    error::FlowError,
    interpreter::{
        flow::{
            core::{ComplexOperand, DoubleOperand, Flow, FlowContext, FlowProcessor, Menu, Operation},
            operation::{BinaryComplexOp, BinaryMixedOp, Function, MenuItem, OperationType},
        },
        lexer::{Token, tokenize},
        value::complex::ComplexNumber,
    },
};

fn process<C: FlowContext>(line: &str) -> Result<C::Output, FlowError> {
    let tokens = tokenize(line);
    FlowProcessor.process(Flow::<C>::new(&tokens))
}

#[test]
fn complex_operand_from_both_parts() {
    assert_eq!(process::<ComplexOperand>("2+i2"), Ok(ComplexNumber::new(2.0, 2.0)));
    assert_eq!(process::<ComplexOperand>("1-i1"), Ok(ComplexNumber::new(1.0, -1.0)));
    assert_eq!(process::<ComplexOperand>("-i2 -2.222"), Ok(ComplexNumber::new(-2.222, -2.0)));
    assert_eq!(process::<ComplexOperand>("  i0.5   3  "), Ok(ComplexNumber::new(3.0, 0.5)));
}

#[test]
fn complex_operand_infers_the_missing_part() {
    assert_eq!(process::<ComplexOperand>("2"), Ok(ComplexNumber::new(2.0, 0.0)));
    assert_eq!(process::<ComplexOperand>("-i1.2"), Ok(ComplexNumber::new(0.0, -1.2)));
    assert_eq!(process::<ComplexOperand>("-i"), Ok(ComplexNumber::new(0.0, -1.0)));
    assert_eq!(process::<ComplexOperand>("i"), Ok(ComplexNumber::new(0.0, 1.0)));
}

#[test]
fn complex_operand_rejects_two_literals_of_the_same_kind() {
    let tokens = vec![Token::Number("2".to_string()), Token::Number("2".to_string())];
    assert_eq!(FlowProcessor.process(Flow::<ComplexOperand>::new(&tokens)),
               Err(FlowError::NonValidArg));
    assert_eq!(process::<ComplexOperand>("2 -2"), Err(FlowError::NonValidArg));
    assert_eq!(process::<ComplexOperand>("i2 -i3"), Err(FlowError::NonValidArg));
}

#[test]
fn complex_operand_rejects_bad_counts_and_kinds() {
    assert!(process::<ComplexOperand>("").is_err());
    assert!(process::<ComplexOperand>("   ").is_err());
    assert!(process::<ComplexOperand>("1 i2 3").is_err());
    assert!(process::<ComplexOperand>("2-2").is_err());
    assert!(process::<ComplexOperand>("2 A").is_err());
    assert!(process::<ComplexOperand>("2x").is_err());
}

#[test]
fn empty_token_slice_is_rejected() {
    assert_eq!(FlowProcessor.process(Flow::<Menu>::new(&[])), Err(FlowError::NonValidArg));
}

#[test]
fn double_operand_accepts_one_real_literal() {
    assert_eq!(process::<DoubleOperand>("-2.5"), Ok(-2.5));
    assert_eq!(process::<DoubleOperand>(" 4 "), Ok(4.0));
}

#[test]
fn double_operand_rejects_imaginary_literals() {
    assert_eq!(process::<DoubleOperand>("i2"), Err(FlowError::NonValidArg));
    assert_eq!(process::<DoubleOperand>("-i"), Err(FlowError::NonValidArg));
}

#[test]
fn double_operand_rejects_more_than_one_literal() {
    assert!(process::<DoubleOperand>("2 3").is_err());
    assert!(process::<DoubleOperand>("2+i2").is_err());
}

#[test]
fn operators_map_to_binary_operations() {
    assert_eq!(process::<Operation>("+"),
               Ok(OperationType::BinaryComplex(BinaryComplexOp::Add)));
    assert_eq!(process::<Operation>(" - "),
               Ok(OperationType::BinaryComplex(BinaryComplexOp::Subtract)));
    assert_eq!(process::<Operation>("*"),
               Ok(OperationType::BinaryMixed(BinaryMixedOp::Multiply)));
    assert_eq!(process::<Operation>("/"),
               Ok(OperationType::BinaryMixed(BinaryMixedOp::Divide)));
}

#[test]
fn function_names_map_to_unary_functions() {
    assert_eq!(process::<Operation>("modulus"),
               Ok(OperationType::UnaryFunction(Function::Modulus)));
    assert_eq!(process::<Operation>("ARG"),
               Ok(OperationType::UnaryFunction(Function::Argument)));
}

#[test]
fn operation_rejects_mixtures_and_extras() {
    assert!(process::<Operation>("+ modulus").is_err());
    assert!(process::<Operation>("+ +").is_err());
    assert!(process::<Operation>("2").is_err());
    assert!(process::<Operation>("plus").is_err());
}

#[test]
fn menu_choices_ignore_case() {
    assert_eq!(process::<Menu>("A"), Ok(MenuItem::Exit));
    assert_eq!(process::<Menu>("a"), Ok(MenuItem::Exit));
    assert_eq!(process::<Menu>("B"), Ok(MenuItem::Target));
    assert_eq!(process::<Menu>(" b"), Ok(MenuItem::Target));
}

#[test]
fn menu_accepts_only_an_exact_choice() {
    assert!(process::<Menu>("AB").is_err());
    assert!(process::<Menu>("Ax").is_err());
    assert!(process::<Menu>("C").is_err());
    assert!(process::<Menu>("arg").is_err());
}

#[test]
fn failure_message_is_fixed() {
    let error = process::<Menu>("nope").unwrap_err();
    assert_eq!(error.to_string(), "non valid arg");
    assert_eq!(process::<Operation>("").ok(), None);
}

#[test]
fn complex_operand_with_imaginary_part_first() {
    assert_eq!(process::<ComplexOperand>("i2-2"), Ok(ComplexNumber::new(-2.0, 2.0)));
    assert_eq!(process::<ComplexOperand>("-i1+3"), Ok(ComplexNumber::new(3.0, -1.0)));
    assert_eq!(process::<ComplexOperand>("i+i"), Err(FlowError::NonValidArg));
}
