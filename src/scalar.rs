use std::ops::{Add, Div, Mul, Sub};

use num_traits::Float;

/// Capabilities an expression scalar must provide.
///
/// The arithmetic operators and transcendental functions are what the node
/// combinators consume. `is_zero` and `in_ln_domain` are the guard hooks the
/// evaluator consults before dividing or taking a logarithm: real scalars
/// test against zero with their ordering, while a scalar without a total
/// order (a complex type, say) supplies its own policy here (accept every
/// value, or test the magnitude) instead of forcing an ordering the type
/// does not have.
pub trait Scalar:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    fn pow(self, exponent: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;

    /// Zero test backing the division guard.
    fn is_zero(&self) -> bool;

    /// Whether `ln` is defined at this value.
    fn in_ln_domain(&self) -> bool;
}

impl<T: Float> Scalar for T {
    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    fn sin(self) -> Self {
        Float::sin(self)
    }

    fn cos(self) -> Self {
        Float::cos(self)
    }

    fn ln(self) -> Self {
        Float::ln(self)
    }

    fn exp(self) -> Self {
        Float::exp(self)
    }

    fn is_zero(&self) -> bool {
        *self == T::zero()
    }

    fn in_ln_domain(&self) -> bool {
        *self > T::zero()
    }
}
