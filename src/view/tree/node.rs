use crate::model::SearchNode;
use std::fmt;

/// Unique identifier for a node instance in the view
///
/// Ids are assigned in pre-order, so the root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Expand state of a node instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// Children are not rendered
    #[default]
    Collapsed,
    /// Children are rendered in a row below the node
    Expanded,
}

impl NodeState {
    pub fn toggled(self) -> Self {
        match self {
            NodeState::Collapsed => NodeState::Expanded,
            NodeState::Expanded => NodeState::Collapsed,
        }
    }
}

/// A node of the search tree together with its view state
#[derive(Debug, Clone)]
pub struct ViewNode {
    /// Unique identifier
    pub id: NodeId,
    /// Search data for this node
    pub value: SearchNode,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs in render order
    pub children: Vec<NodeId>,
    /// Position among the parent's children
    pub index: usize,
    /// Distance from the root
    pub depth: usize,
    /// Current expand state
    pub state: NodeState,
}

impl ViewNode {
    pub fn is_expanded(&self) -> bool {
        self.state == NodeState::Expanded
    }

    pub fn is_collapsed(&self) -> bool {
        self.state == NodeState::Collapsed
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether a child row is drawn for this node
    pub fn shows_children(&self) -> bool {
        self.is_expanded() && !self.is_leaf()
    }
}
