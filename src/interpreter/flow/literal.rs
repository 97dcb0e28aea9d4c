use crate::{
    error::FlowError,
    interpreter::{flow::core::FlowResult, value::complex::ComplexNumber},
};

/// A number literal, read as either a real or an imaginary magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// A literal without the `i` marker.
    Real(f64),
    /// A literal carrying the `i` marker.
    Imaginary(f64),
}

/// Evaluates the text of a `Number` token.
///
/// The `i` marker is removed and decides the kind. A marker with nothing
/// but a sign around it stands for magnitude one, so `-i` is `-1` and `i` is
/// `1`.
///
/// # Errors
/// Returns [`FlowError::NonValidArg`] if the remaining text is not a number.
///
/// # Example
/// ```
/// use cplx::interpreter::flow::literal::{Literal, evaluate};
///
/// assert_eq!(evaluate("-2.5"), Ok(Literal::Real(-2.5)));
/// assert_eq!(evaluate("+i2"), Ok(Literal::Imaginary(2.0)));
/// assert_eq!(evaluate("-i"), Ok(Literal::Imaginary(-1.0)));
/// ```
pub fn evaluate(text: &str) -> FlowResult<Literal> {
    let Some(marker) = text.find('i') else {
        return parse(text).map(Literal::Real);
    };

    let mut magnitude = String::with_capacity(text.len());
    magnitude.push_str(&text[..marker]);
    magnitude.push_str(&text[marker + 1..]);
    if matches!(magnitude.as_str(), "" | "+" | "-") {
        magnitude.push('1');
    }

    parse(&magnitude).map(Literal::Imaginary)
}

fn parse(text: &str) -> FlowResult<f64> {
    text.parse().map_err(|_| FlowError::NonValidArg)
}

/// Builds a complex number out of one or two literals.
///
/// A single literal leaves the other component at zero. Two literals must be
/// of different kinds; their order does not matter.
///
/// # Errors
/// Returns [`FlowError::NonValidArg`] for two literals of the same kind or
/// for a literal count other than one or two.
///
/// # Example
/// ```
/// use cplx::interpreter::{
///     flow::literal::{Literal, combine},
///     value::complex::ComplexNumber,
/// };
///
/// let z = combine(&[Literal::Imaginary(-1.0), Literal::Real(1.0)]);
/// assert_eq!(z, Ok(ComplexNumber::new(1.0, -1.0)));
/// assert!(combine(&[Literal::Real(2.0), Literal::Real(2.0)]).is_err());
/// ```
pub fn combine(literals: &[Literal]) -> FlowResult<ComplexNumber> {
    match *literals {
        [Literal::Real(real)] => Ok(ComplexNumber::new(real, 0.0)),
        [Literal::Imaginary(imaginary)] => Ok(ComplexNumber::new(0.0, imaginary)),
        [Literal::Real(real), Literal::Imaginary(imaginary)]
        | [Literal::Imaginary(imaginary), Literal::Real(real)] => {
            Ok(ComplexNumber::new(real, imaginary))
        },
        _ => Err(FlowError::NonValidArg),
    }
}
