use std::fmt::Display;

/// A unary function applied to a single complex operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `modulus`
    Modulus,
    /// `arg`
    Argument,
}

/// An operation taking two complex operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryComplexOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

/// An operation taking a complex operand and a real operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryMixedOp {
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

/// What an operation flow can yield.
///
/// The variant decides which state the conversation moves to next: a unary
/// function is evaluated right away, the binary kinds ask for a second
/// operand of the matching type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// `modulus` or `arg`.
    UnaryFunction(Function),
    /// `+` or `-`.
    BinaryComplex(BinaryComplexOp),
    /// `*` or `/`.
    BinaryMixed(BinaryMixedOp),
}

/// A choice offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// `A`: leave the calculator.
    Exit,
    /// `B`: go on to the first operand.
    Target,
}

impl OperationType {
    /// Reads an operator symbol.
    #[must_use]
    pub fn from_operator(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::BinaryComplex(BinaryComplexOp::Add)),
            "-" => Some(Self::BinaryComplex(BinaryComplexOp::Subtract)),
            "*" => Some(Self::BinaryMixed(BinaryMixedOp::Multiply)),
            "/" => Some(Self::BinaryMixed(BinaryMixedOp::Divide)),
            _ => None,
        }
    }

    /// Reads a function name, ignoring ASCII case.
    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "modulus" => Some(Self::UnaryFunction(Function::Modulus)),
            "arg" => Some(Self::UnaryFunction(Function::Argument)),
            _ => None,
        }
    }
}

impl MenuItem {
    /// Reads a menu choice, ignoring ASCII case.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.to_ascii_uppercase().as_str() {
            "A" => Some(Self::Exit),
            "B" => Some(Self::Target),
            _ => None,
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modulus => write!(f, "modulus"),
            Self::Argument => write!(f, "arg"),
        }
    }
}

impl Display for BinaryComplexOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
        }
    }
}

impl Display for BinaryMixedOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}
