//! Visual encoding of search nodes
//!
//! Maximizing nodes are drawn as circles and minimizing nodes as squares.
//! Pruned branches are tinted red, everything else black.

use crate::model::SearchNode;

/// Node shape, chosen by whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
}

impl Shape {
    pub fn glyph(self) -> &'static str {
        match self {
            Shape::Circle => "●",
            Shape::Square => "■",
        }
    }
}

/// Node colour, chosen by whether the branch was pruned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Black,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: Shape,
    pub tint: Tint,
}

impl NodeStyle {
    pub fn for_node(node: &SearchNode) -> Self {
        Self {
            shape: if node.is_max {
                Shape::Circle
            } else {
                Shape::Square
            },
            tint: if node.pruned { Tint::Red } else { Tint::Black },
        }
    }
}

/// Text shown under a node: `[alpha,beta] --- h_val`
pub fn node_label(node: &SearchNode) -> String {
    format!("[{},{}] --- {}", node.alpha, node.beta, node.h_val)
}
