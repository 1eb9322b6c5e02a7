use std::collections::HashMap;

use log::trace;
use rayon::prelude::*;
use thiserror::Error;

use super::expression::{Expression, Node};
use crate::scalar::Scalar;

/// Variable environment supplied to evaluation.
pub type Bindings<T> = HashMap<String, T>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("variable '{0}' is not bound in the environment")]
    UnboundVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("ln applied outside its domain")]
    LogDomain,
    #[error("expression has no root node")]
    MalformedTree,
}

impl<T: Scalar> Expression<T> {
    /// Evaluates the tree against `bindings`.
    ///
    /// Recursive post-order walk, left operand strictly before the right
    /// one. A subtree reachable through several paths is evaluated once per
    /// path; there is no memoization, so the cost is proportional to the
    /// expanded tree, not the distinct node count. Recursion depth equals
    /// tree depth.
    pub fn evaluate(&self, bindings: &Bindings<T>) -> Result<T, EvalError> {
        match &self.root {
            Some(root) => evaluate_node(root, bindings),
            None => Err(EvalError::MalformedTree),
        }
    }

    /// Evaluates the same tree against many environments in parallel.
    ///
    /// Results keep the order of `environments`. Trees are immutable and
    /// shared behind `Arc`, so worker threads read them without locking.
    pub fn evaluate_batch(&self, environments: &[Bindings<T>]) -> Vec<Result<T, EvalError>>
    where
        T: Send + Sync,
    {
        environments
            .par_iter()
            .map(|bindings| self.evaluate(bindings))
            .collect()
    }
}

fn evaluate_node<T: Scalar>(node: &Node<T>, bindings: &Bindings<T>) -> Result<T, EvalError> {
    match node {
        Node::Constant(value) => Ok(value.clone()),
        Node::Variable(name) => bindings.get(name).cloned().ok_or_else(|| {
            trace!("variable '{}' missing from the environment", name);
            EvalError::UnboundVariable(name.clone())
        }),
        Node::Binary { op, left, right } => {
            let left = evaluate_node(left, bindings)?;
            let right = evaluate_node(right, bindings)?;
            op.apply(left, right)
        }
        Node::Unary { op, operand } => {
            let operand = evaluate_node(operand, bindings)?;
            op.apply(operand)
        }
    }
}
