/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts. Includes the four arithmetic operations against complex numbers or
/// real scalars, modulus, argument and the canonical `<real>+i<imag>`
/// rendering.
pub mod complex;
