use std::fmt;

use super::expression::{Expression, Node};

/// Fully parenthesized infix rendering. Every binary node gets its own
/// parentheses regardless of precedence, unary functions render as
/// `name(operand)`, and the empty expression renders as an empty string.
impl<T: fmt::Display> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write_node(root, f),
            None => Ok(()),
        }
    }
}

fn write_node<T: fmt::Display>(node: &Node<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        Node::Constant(value) => write!(f, "{}", value),
        Node::Variable(name) => f.write_str(name),
        Node::Binary { op, left, right } => {
            f.write_str("(")?;
            write_node(left, f)?;
            write!(f, " {} ", op.symbol())?;
            write_node(right, f)?;
            f.write_str(")")
        }
        Node::Unary { op, operand } => {
            write!(f, "{}(", op.func_name())?;
            write_node(operand, f)?;
            f.write_str(")")
        }
    }
}
