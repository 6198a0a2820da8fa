//! Discriminator tree: a strict binary tree of yes/no questions over characters.

use std::fmt;

use crate::domain::entities::{Attribute, Character};

/// Node of the discriminator tree.
///
/// Internal nodes exclusively own both children; the tree is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single remaining candidate.
    Leaf(Character),
    /// A yes/no test on `attribute == value`.
    Internal {
        attribute: Attribute,
        value: String,
        question: String,
        yes: Box<Node>,
        no: Box<Node>,
    },
}

/// Shape summary of a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub leaves: usize,
    pub internal: usize,
    /// Fewest questions needed to reach a leaf
    pub min_depth: usize,
    /// Most questions needed to reach a leaf
    pub max_depth: usize,
}

impl Node {
    pub fn leaf(character: Character) -> Self {
        Node::Leaf(character)
    }

    pub fn internal(attribute: Attribute, value: impl Into<String>, yes: Node, no: Node) -> Self {
        let value = value.into();
        Node::Internal {
            attribute,
            question: attribute.question(&value),
            value,
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        self.stats().leaves
    }

    /// Number of internal (question) nodes under and including this one.
    pub fn internal_count(&self) -> usize {
        self.stats().internal
    }

    /// Minimum and maximum number of questions from here to a leaf.
    pub fn depth_range(&self) -> (usize, usize) {
        let stats = self.stats();
        (stats.min_depth, stats.max_depth)
    }

    /// Walks with an explicit stack; name-split chains can be as deep as the dataset.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            leaves: 0,
            internal: 0,
            min_depth: usize::MAX,
            max_depth: 0,
        };
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf(_) => {
                    stats.leaves += 1;
                    stats.min_depth = stats.min_depth.min(depth);
                    stats.max_depth = stats.max_depth.max(depth);
                }
                Node::Internal { yes, no, .. } => {
                    stats.internal += 1;
                    stack.push((no.as_ref(), depth + 1));
                    stack.push((yes.as_ref(), depth + 1));
                }
            }
        }
        stats
    }

    /// Leaf characters in order, "yes" subtrees before "no" subtrees.
    pub fn characters(&self) -> Characters<'_> {
        Characters { stack: vec![self] }
    }
}

/// Depth-first iterator over the characters stored in leaves.
pub struct Characters<'t> {
    stack: Vec<&'t Node>,
}

impl<'t> Iterator for Characters<'t> {
    type Item = &'t Character;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(character) => return Some(character),
                Node::Internal { yes, no, .. } => {
                    self.stack.push(no);
                    self.stack.push(yes);
                }
            }
        }
        None
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(character) => write!(f, "{}", character),
            Node::Internal { question, .. } => write!(f, "{}", question),
        }
    }
}
