use crate::scalar::Scalar;

mod display;
mod evaluator;
mod expression;
mod substitute;

pub use evaluator::{Bindings, EvalError};
pub use expression::Expression;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn apply<T: Scalar>(&self, left: T, right: T) -> Result<T, EvalError> {
        match self {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Subtract => Ok(left - right),
            BinaryOp::Multiply => Ok(left * right),
            BinaryOp::Divide => {
                if right.is_zero() {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            BinaryOp::Power => Ok(left.pow(right)),
        }
    }

    /// Infix symbol used by the text rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Ln,
    Exp,
}

impl UnaryOp {
    pub fn apply<T: Scalar>(&self, operand: T) -> Result<T, EvalError> {
        match self {
            UnaryOp::Sin => Ok(operand.sin()),
            UnaryOp::Cos => Ok(operand.cos()),
            UnaryOp::Ln => {
                if operand.in_ln_domain() {
                    Ok(operand.ln())
                } else {
                    Err(EvalError::LogDomain)
                }
            }
            UnaryOp::Exp => Ok(operand.exp()),
        }
    }

    /// Function name used by the text rendering.
    pub fn func_name(&self) -> &'static str {
        match self {
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Ln => "ln",
            UnaryOp::Exp => "exp",
        }
    }
}
