use super::node::{NodeId, NodeState, ViewNode};
use crate::model::{SearchNode, Tree};

/// View state for a search tree: one expand state per node instance, the
/// keyboard selection and the outline scroll position.
///
/// The tree is flattened into an arena when the view is created. Node values
/// never change afterwards; only `NodeState`s do.
#[derive(Debug)]
pub struct TreeView {
    /// All node instances, indexed by `NodeId`
    nodes: Vec<ViewNode>,
    /// Currently selected node (always visible)
    selected: NodeId,
    /// Scroll offset (index into visible nodes)
    scroll_offset: usize,
    /// Last known viewport height (for scrolling calculations)
    viewport_height: usize,
}

impl TreeView {
    /// Flatten a loaded tree into a view with every node collapsed
    pub fn new(tree: Tree<SearchNode>) -> Self {
        let mut nodes: Vec<ViewNode> = Vec::with_capacity(tree.node_count());
        let mut stack = vec![(&tree, None::<NodeId>, 0usize, 0usize)];

        while let Some((subtree, parent, index, depth)) = stack.pop() {
            let id = NodeId(nodes.len());

            nodes.push(ViewNode {
                id,
                value: subtree.val.clone(),
                parent,
                children: Vec::with_capacity(subtree.next.len()),
                index,
                depth,
                state: NodeState::Collapsed,
            });

            if let Some(parent_id) = parent {
                nodes[parent_id.0].children.push(id);
            }

            // Reversed so the first child is popped (and numbered) first
            for (child_index, child) in subtree.next.iter().enumerate().rev() {
                stack.push((child, Some(id), child_index, depth + 1));
            }
        }

        Self {
            nodes,
            selected: NodeId(0),
            scroll_offset: 0,
            viewport_height: 10, // Default, will be updated during rendering
        }
    }

    /// Get the root node ID
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of node instances
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&ViewNode> {
        self.nodes.get(id.0)
    }

    /// Get all nodes in pre-order
    pub fn all_nodes(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.iter()
    }

    /// Expand state of a node (None if the id is unknown)
    pub fn state(&self, id: NodeId) -> Option<NodeState> {
        self.get_node(id).map(|node| node.state)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.state(id) == Some(NodeState::Expanded)
    }

    /// Flip a node between collapsed and expanded.
    ///
    /// Only the node itself changes state, except that collapsing removes
    /// its subtree from the view: every descendant goes back to `Collapsed`
    /// and a selection inside the subtree moves up to this node.
    ///
    /// Hidden nodes cannot be toggled, so a collapsed node never has an
    /// expanded descendant.
    ///
    /// Returns the new state, or None if the id is unknown or hidden.
    pub fn toggle(&mut self, id: NodeId) -> Option<NodeState> {
        if !self.is_visible(id) {
            return None;
        }
        let node = &mut self.nodes[id.0];
        let new_state = node.state.toggled();
        node.state = new_state;

        if new_state == NodeState::Collapsed {
            self.reset_descendants(id);
            if self.is_descendant(self.selected, id) {
                self.selected = id;
            }
        }

        tracing::debug!("Toggled {} to {:?}", id, new_state);
        Some(new_state)
    }

    fn reset_descendants(&mut self, id: NodeId) {
        let mut stack: Vec<NodeId> = self.nodes[id.0].children.clone();
        while let Some(child) = stack.pop() {
            let node = &mut self.nodes[child.0];
            node.state = NodeState::Collapsed;
            stack.extend(node.children.iter().copied());
        }
    }

    /// True if `node` lies strictly below `ancestor`
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.get_node(node).and_then(|n| n.parent);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.nodes[parent_id.0].parent;
        }
        false
    }

    /// True if every ancestor of the node is expanded
    pub fn is_visible(&self, id: NodeId) -> bool {
        let Some(node) = self.get_node(id) else {
            return false;
        };
        let mut current = node.parent;
        while let Some(parent_id) = current {
            let parent = &self.nodes[parent_id.0];
            if !parent.is_expanded() {
                return false;
            }
            current = parent.parent;
        }
        true
    }

    /// Nodes currently on screen, in pre-order
    ///
    /// Children of a collapsed node are never visited.
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        let mut visible = Vec::new();
        let mut stack = vec![self.root_id()];

        while let Some(id) = stack.pop() {
            visible.push(id);
            let node = &self.nodes[id.0];
            if node.is_expanded() {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        visible
    }

    /// Get currently visible nodes with their indent levels
    pub fn display_nodes(&self) -> Vec<(NodeId, usize)> {
        self.visible_nodes()
            .into_iter()
            .map(|id| (id, self.nodes[id.0].depth))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_nodes().len()
    }

    /// Child indices leading from the root to the node
    pub fn path(&self, id: NodeId) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self.get_node(id);
        while let Some(node) = current {
            if node.parent.is_none() {
                break;
            }
            path.push(node.index);
            current = node.parent.and_then(|p| self.get_node(p));
        }
        path.reverse();
        path
    }

    /// Get the currently selected node ID
    pub fn selected(&self) -> NodeId {
        self.selected
    }

    /// Select a node if it is visible
    pub fn set_selected(&mut self, id: NodeId) {
        if self.is_visible(id) {
            self.selected = id;
        }
    }

    /// Select the next visible node
    pub fn select_next(&mut self) {
        let visible = self.visible_nodes();
        if let Some(pos) = visible.iter().position(|&id| id == self.selected) {
            if pos + 1 < visible.len() {
                self.selected = visible[pos + 1];
            }
        }
    }

    /// Select the previous visible node
    pub fn select_prev(&mut self) {
        let visible = self.visible_nodes();
        if let Some(pos) = visible.iter().position(|&id| id == self.selected) {
            if pos > 0 {
                self.selected = visible[pos - 1];
            }
        }
    }

    /// Select the first visible node
    pub fn select_first(&mut self) {
        self.selected = self.root_id();
    }

    /// Select the last visible node
    pub fn select_last(&mut self) {
        if let Some(&last) = self.visible_nodes().last() {
            self.selected = last;
        }
    }

    /// Select the parent of the currently selected node
    pub fn select_parent(&mut self) {
        if let Some(parent_id) = self.nodes[self.selected.0].parent {
            self.selected = parent_id;
        }
    }

    /// Select the first child if the selected node shows its children
    pub fn select_first_child(&mut self) {
        let node = &self.nodes[self.selected.0];
        if node.shows_children() {
            self.selected = node.children[0];
        }
    }

    /// Select the sibling to the right
    pub fn select_next_sibling(&mut self) {
        if let Some(sibling) = self.sibling(1) {
            self.selected = sibling;
        }
    }

    /// Select the sibling to the left
    pub fn select_prev_sibling(&mut self) {
        if let Some(sibling) = self.sibling(-1) {
            self.selected = sibling;
        }
    }

    fn sibling(&self, offset: isize) -> Option<NodeId> {
        let node = &self.nodes[self.selected.0];
        let parent = &self.nodes[node.parent?.0];
        let index = node.index.checked_add_signed(offset)?;
        parent.children.get(index).copied()
    }

    /// Index of the selected node in the visible list
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_nodes()
            .iter()
            .position(|&id| id == self.selected)
    }

    /// Set the viewport height (should be called during rendering)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll by a number of rows, clamped to the visible list
    pub fn scroll_by(&mut self, delta: isize) {
        let max_offset = self.visible_count().saturating_sub(1);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);
    }

    /// Adjust the scroll offset so the selection is inside the viewport.
    ///
    /// The offset only moves when the selection goes past an edge.
    pub fn ensure_selection_visible(&mut self) {
        if self.viewport_height == 0 {
            return;
        }

        if let Some(pos) = self.selected_index() {
            if pos < self.scroll_offset {
                self.scroll_offset = pos;
            } else if pos >= self.scroll_offset + self.viewport_height {
                self.scroll_offset = pos - self.viewport_height + 1;
            }
        }
    }

    /// Visible node at a row of the outline, accounting for scroll offset
    pub fn node_at_row(&self, row: usize) -> Option<NodeId> {
        self.visible_nodes().get(self.scroll_offset + row).copied()
    }
}
