use std::sync::Arc;

use log::debug;

use super::expression::{Expression, Node};

impl<T: Clone> Expression<T> {
    /// Produces a new tree in which every occurrence of `name` is replaced
    /// by `replacement`'s tree. The receiver and anything sharing its nodes
    /// are untouched.
    ///
    /// The spine of the result is freshly allocated: constants and
    /// non-matching variables are new nodes, and so is every interior node,
    /// even along paths that contain no occurrence of `name`. Replaced
    /// occurrences all alias the *same* replacement root, so a variable
    /// appearing k times shares one copy of the replacement's nodes rather
    /// than owning k of them. Recursion depth equals tree depth.
    pub fn substitute(&self, name: &str, replacement: &Expression<T>) -> Expression<T> {
        let root = match &self.root {
            Some(root) => root,
            None => return Expression::default(),
        };
        let replacement_root = match &replacement.root {
            Some(node) => node,
            None => {
                debug!("substituting '{}' with an empty expression; keeping tree as is", name);
                return self.clone();
            }
        };

        debug!("substituting '{}' in expression tree", name);
        Expression {
            root: Some(substitute_node(root, name, replacement_root)),
        }
    }
}

fn substitute_node<T: Clone>(
    node: &Arc<Node<T>>,
    name: &str,
    replacement: &Arc<Node<T>>,
) -> Arc<Node<T>> {
    match &**node {
        Node::Constant(value) => Arc::new(Node::Constant(value.clone())),
        Node::Variable(n) if n == name => Arc::clone(replacement),
        Node::Variable(n) => Arc::new(Node::Variable(n.clone())),
        Node::Binary { op, left, right } => Arc::new(Node::Binary {
            op: *op,
            left: substitute_node(left, name, replacement),
            right: substitute_node(right, name, replacement),
        }),
        Node::Unary { op, operand } => Arc::new(Node::Unary {
            op: *op,
            operand: substitute_node(operand, name, replacement),
        }),
    }
}
