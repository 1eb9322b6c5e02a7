use std::ops::{Add, BitXor, Div, Mul, Sub};
use std::sync::Arc;

use super::{BinaryOp, UnaryOp};

/// One immutable unit of an expression tree.
///
/// Child links are `Arc`s: a subtree may be referenced from several parents
/// and several handles at once, and is never copied when a new node is built
/// on top of it. Nodes are never mutated after construction.
#[derive(Debug)]
pub(crate) enum Node<T> {
    Constant(T),
    Variable(String),
    Binary {
        op: BinaryOp,
        left: Arc<Node<T>>,
        right: Arc<Node<T>>,
    },
    Unary {
        op: UnaryOp,
        operand: Arc<Node<T>>,
    },
}

/// Handle to the root of an immutable expression tree.
///
/// Cloning a handle aliases the same root in O(1). Combining handles with
/// the arithmetic operators allocates exactly one new node whose children
/// alias the operands' roots, leaving the operands untouched. The default
/// value is the empty expression: it renders as an empty string, passes
/// through substitution unchanged, and is the one shape evaluation rejects.
#[derive(Debug)]
pub struct Expression<T> {
    pub(crate) root: Option<Arc<Node<T>>>,
}

impl<T> Clone for Expression<T> {
    fn clone(&self) -> Self {
        Expression {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for Expression<T> {
    fn default() -> Self {
        Expression { root: None }
    }
}

impl<T> Expression<T> {
    /// A one-node tree holding a literal scalar.
    pub fn constant(value: T) -> Self {
        Expression {
            root: Some(Arc::new(Node::Constant(value))),
        }
    }

    /// A one-node tree holding a free variable. Names are opaque tokens:
    /// the same name anywhere in a tree refers to the same unknown.
    pub fn variable(name: impl Into<String>) -> Self {
        Expression {
            root: Some(Arc::new(Node::Variable(name.into()))),
        }
    }

    /// True when this handle holds no tree at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn binary(op: BinaryOp, lhs: &Expression<T>, rhs: &Expression<T>) -> Self {
        match (&lhs.root, &rhs.root) {
            (Some(left), Some(right)) => Expression {
                root: Some(Arc::new(Node::Binary {
                    op,
                    left: Arc::clone(left),
                    right: Arc::clone(right),
                })),
            },
            _ => Expression::default(),
        }
    }

    fn unary(op: UnaryOp, operand: &Expression<T>) -> Self {
        match &operand.root {
            Some(node) => Expression {
                root: Some(Arc::new(Node::Unary {
                    op,
                    operand: Arc::clone(node),
                })),
            },
            None => Expression::default(),
        }
    }

    /// Raises this expression to `exponent`.
    ///
    /// The `^` operator builds the same node; note that Rust gives `^`
    /// lower precedence than `+` and `*`, so parenthesize mixed uses.
    pub fn pow(&self, exponent: &Expression<T>) -> Self {
        Expression::binary(BinaryOp::Power, self, exponent)
    }

    pub fn sin(&self) -> Self {
        Expression::unary(UnaryOp::Sin, self)
    }

    pub fn cos(&self) -> Self {
        Expression::unary(UnaryOp::Cos, self)
    }

    pub fn ln(&self) -> Self {
        Expression::unary(UnaryOp::Ln, self)
    }

    pub fn exp(&self) -> Self {
        Expression::unary(UnaryOp::Exp, self)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T> $trait for Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: Expression<T>) -> Expression<T> {
                Expression::binary($op, &self, &rhs)
            }
        }

        impl<T> $trait<&Expression<T>> for Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: &Expression<T>) -> Expression<T> {
                Expression::binary($op, &self, rhs)
            }
        }

        impl<T> $trait<Expression<T>> for &Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: Expression<T>) -> Expression<T> {
                Expression::binary($op, self, &rhs)
            }
        }

        impl<T> $trait<&Expression<T>> for &Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: &Expression<T>) -> Expression<T> {
                Expression::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Subtract);
impl_binary_operator!(Mul, mul, BinaryOp::Multiply);
impl_binary_operator!(Div, div, BinaryOp::Divide);
impl_binary_operator!(BitXor, bitxor, BinaryOp::Power);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Bindings;

    #[test]
    fn test_constant_is_a_single_node() {
        let c = Expression::constant(42.0);
        match c.root.as_deref() {
            Some(Node::Constant(value)) => assert_eq!(*value, 42.0),
            other => panic!("expected a constant node, got {:?}", other),
        }
    }

    #[test]
    fn test_variable_is_a_single_node() {
        let v = Expression::<f64>::variable("velocity");
        match v.root.as_deref() {
            Some(Node::Variable(name)) => assert_eq!(name, "velocity"),
            other => panic!("expected a variable node, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_aliases_the_same_root() {
        let x = Expression::<f64>::variable("x");
        let alias = x.clone();
        assert!(Arc::ptr_eq(
            x.root.as_ref().unwrap(),
            alias.root.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_builder_aliases_operand_roots() {
        let a = Expression::constant(1.0);
        let b = Expression::<f64>::variable("b");
        let sum = &a + &b;

        match sum.root.as_deref() {
            Some(Node::Binary { op, left, right }) => {
                assert_eq!(*op, BinaryOp::Add);
                assert!(Arc::ptr_eq(left, a.root.as_ref().unwrap()));
                assert!(Arc::ptr_eq(right, b.root.as_ref().unwrap()));
            }
            other => panic!("expected a binary node, got {:?}", other),
        }
    }

    #[test]
    fn test_unary_builder_aliases_operand_root() {
        let x = Expression::<f64>::variable("x");
        let wrapped = x.sin();

        match wrapped.root.as_deref() {
            Some(Node::Unary { op, operand }) => {
                assert_eq!(*op, UnaryOp::Sin);
                assert!(Arc::ptr_eq(operand, x.root.as_ref().unwrap()));
            }
            other => panic!("expected a unary node, got {:?}", other),
        }
    }

    #[test]
    fn test_combining_does_not_mutate_operands() {
        let a = Expression::constant(2.0);
        let x = Expression::variable("x");
        let bindings = Bindings::from([("x".to_string(), 7.0)]);

        let a_before = a.evaluate(&bindings).unwrap();
        let x_before = x.evaluate(&bindings).unwrap();

        let _sum = &a + &x;
        let _self_product = &x * &x;

        assert_eq!(a.evaluate(&bindings).unwrap(), a_before);
        assert_eq!(x.evaluate(&bindings).unwrap(), x_before);
    }

    #[test]
    fn test_operator_forms_agree() {
        let x = Expression::variable("x");
        let two = Expression::constant(2.0);
        let bindings = Bindings::from([("x".to_string(), 5.0)]);

        let owned = x.clone() * two.clone();
        let borrowed = &x * &two;
        let mixed = x.clone() * &two;

        assert_eq!(owned.evaluate(&bindings).unwrap(), 10.0);
        assert_eq!(borrowed.evaluate(&bindings).unwrap(), 10.0);
        assert_eq!(mixed.evaluate(&bindings).unwrap(), 10.0);
    }

    #[test]
    fn test_caret_builds_a_power_node() {
        let x = Expression::<f64>::variable("x");
        let squared = &x ^ &Expression::constant(2.0);
        match squared.root.as_deref() {
            Some(Node::Binary { op, .. }) => assert_eq!(*op, BinaryOp::Power),
            other => panic!("expected a power node, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_operand_yields_empty_expression() {
        let x = Expression::<f64>::variable("x");
        let empty = Expression::<f64>::default();

        assert!((&x + &empty).is_empty());
        assert!((&empty * &x).is_empty());
        assert!(empty.sin().is_empty());
        assert!(empty.pow(&x).is_empty());
    }
}
