use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt::Display,
    ops,
};

use ordered_float::OrderedFloat;

/// Formats a real value with six decimal places.
///
/// Values without a decimal expansion print as `nan`, `inf` and `-inf`.
///
/// # Example
/// ```
/// use cplx::interpreter::value::complex::format_fixed;
/// assert_eq!(format_fixed(1.5), "1.500000");
/// assert_eq!(format_fixed(f64::NAN), "nan");
/// assert_eq!(format_fixed(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// Renders the number as `<real>+i<imag>` or `<real>-i<|imag|>`, both parts
/// formatted by [`format_fixed`].
///
/// # Example
/// ```
/// use cplx::interpreter::value::complex::ComplexNumber;
/// assert_eq!(ComplexNumber::new(3.0, 1.0).to_string(), "3.000000+i1.000000");
/// assert_eq!(ComplexNumber::new(-0.5, -2.0).to_string(), "-0.500000-i2.000000");
/// ```
impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let real = format_fixed(self.real);
        if self.imaginary < 0.0 {
            write!(f, "{real}-i{}", format_fixed(-self.imaginary))
        } else {
            write!(f, "{real}+i{}", format_fixed(self.imaginary.abs()))
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the modulus (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.modulus(), 5.0);
    /// ```
    #[must_use]
    pub fn modulus(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians, in `(-pi, pi]`.
    ///
    /// The argument of zero is undefined and reported as `NaN`.
    ///
    /// # Example
    /// ```
    /// use cplx::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.argument() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// assert!(ComplexNumber::new(0.0, 0.0).argument().is_nan());
    /// ```
    #[must_use]
    pub fn argument(&self) -> f64 {
        match (self.real, self.imaginary) {
            (real, imaginary) if real > 0.0 => (imaginary / real).atan(),
            (real, imaginary) if real < 0.0 && imaginary >= 0.0 => (imaginary / real).atan() + PI,
            (real, imaginary) if real < 0.0 => (imaginary / real).atan() - PI,
            (_, imaginary) if imaginary > 0.0 => FRAC_PI_2,
            (_, imaginary) if imaginary < 0.0 => -FRAC_PI_2,
            _ => f64::NAN,
        }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul<f64> for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { real:      self.real * rhs,
               imaginary: self.imaginary * rhs, }
    }
}

impl ops::Div<f64> for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self { real:      self.real / rhs,
               imaginary: self.imaginary / rhs, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}
