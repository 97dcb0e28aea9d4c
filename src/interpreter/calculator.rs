use crate::interpreter::{
    flow::operation::{BinaryComplexOp, BinaryMixedOp, Function},
    value::complex::ComplexNumber,
};

/// Applies a unary function to a complex operand.
///
/// # Example
/// ```
/// use cplx::interpreter::{
///     calculator::apply_function,
///     flow::operation::Function,
///     value::complex::ComplexNumber,
/// };
///
/// assert_eq!(apply_function(ComplexNumber::new(3.0, 4.0), Function::Modulus), 5.0);
/// ```
#[must_use]
pub fn apply_function(operand: ComplexNumber, function: Function) -> f64 {
    match function {
        Function::Modulus => operand.modulus(),
        Function::Argument => operand.argument(),
    }
}

/// Applies a binary operation to two complex operands.
///
/// # Example
/// ```
/// use cplx::interpreter::{
///     calculator::apply_complex,
///     flow::operation::BinaryComplexOp,
///     value::complex::ComplexNumber,
/// };
///
/// let sum = apply_complex((ComplexNumber::new(2.0, 2.0), ComplexNumber::new(1.0, -1.0)),
///                         BinaryComplexOp::Add);
/// assert_eq!(sum, ComplexNumber::new(3.0, 1.0));
/// ```
#[must_use]
pub fn apply_complex((left, right): (ComplexNumber, ComplexNumber),
                     operation: BinaryComplexOp)
                     -> ComplexNumber {
    match operation {
        BinaryComplexOp::Add => left + right,
        BinaryComplexOp::Subtract => left - right,
    }
}

/// Applies a binary operation to a complex operand and a real scalar.
///
/// Division by zero follows IEEE 754 and yields infinite or `NaN` parts.
#[must_use]
pub fn apply_mixed((left, right): (ComplexNumber, f64), operation: BinaryMixedOp) -> ComplexNumber {
    match operation {
        BinaryMixedOp::Multiply => left * right,
        BinaryMixedOp::Divide => left / right,
    }
}
