//! Diagram layout
//!
//! Every visible node is a two-line block: its shape centred on the first
//! line and its label on the second. An expanded node gets a connector line
//! and then one row holding its children, left to right in tree order. Each
//! block is centred over the width of its subtree.
//!
//! Coordinates are in canvas space (column, row) starting at the root's
//! top-left corner; the renderer maps them through the current pan offset.

use super::style::node_label;
use super::tree::{NodeId, TreeView};
use crate::model::SearchNode;
use unicode_width::UnicodeWidthStr;

/// Rows taken by one node block
pub const BLOCK_HEIGHT: usize = 2;

/// Rows from one tree level to the next (block plus connector line)
pub const LEVEL_HEIGHT: usize = BLOCK_HEIGHT + 1;

/// Where a node block ended up on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: NodeId,
    /// Left column of the block
    pub x: usize,
    /// Top row of the block
    pub y: usize,
    /// Block width (label width)
    pub width: usize,
    /// Column of the shape glyph
    pub center: usize,
}

impl Placement {
    /// Check if a canvas cell is inside the clickable block
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + BLOCK_HEIGHT
    }
}

/// One box-drawing character of a connector line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorCell {
    pub x: usize,
    pub y: usize,
    pub glyph: char,
}

/// Positions of every visible node, computed from the current view state
#[derive(Debug, Clone, Default)]
pub struct DiagramLayout {
    placements: Vec<Placement>,
    connectors: Vec<ConnectorCell>,
    width: usize,
    height: usize,
}

impl DiagramLayout {
    /// Lay out the visible part of the tree
    pub fn compute(view: &TreeView, sibling_gap: usize) -> Self {
        let mut layout = Self::default();
        if view.is_empty() {
            return layout;
        }

        let visible = view.visible_nodes();
        let spans = measure(view, &visible, sibling_gap);
        layout.width = spans[view.root_id().0];
        layout.place(view, sibling_gap, &spans);
        layout
    }

    /// Node blocks in pre-order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn connectors(&self) -> &[ConnectorCell] {
        &self.connectors
    }

    /// Total canvas width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total canvas height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn placement(&self, id: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Hit test: the node whose block covers a canvas cell
    pub fn node_at(&self, x: usize, y: usize) -> Option<NodeId> {
        self.placements
            .iter()
            .find(|p| p.contains(x, y))
            .map(|p| p.id)
    }

    /// Position every visible node, parents before children
    fn place(&mut self, view: &TreeView, gap: usize, spans: &[usize]) {
        let mut stack = vec![(view.root_id(), 0usize, 0usize)];

        while let Some((id, left, y)) = stack.pop() {
            let Some(node) = view.get_node(id) else {
                continue;
            };

            let (x, width, center) = block_position(&node.value, left, spans[id.0]);
            self.placements.push(Placement {
                id,
                x,
                y,
                width,
                center,
            });
            self.height = self.height.max(y + BLOCK_HEIGHT);

            if !node.shows_children() {
                continue;
            }

            let row_width = children_width(&node.children, gap, spans);
            let mut child_left = left + (spans[id.0] - row_width) / 2;
            let mut child_slots = Vec::with_capacity(node.children.len());
            let mut child_centers = Vec::with_capacity(node.children.len());

            for &child in &node.children {
                if let Some(child_node) = view.get_node(child) {
                    let (_, _, child_center) =
                        block_position(&child_node.value, child_left, spans[child.0]);
                    child_centers.push(child_center);
                }
                child_slots.push((child, child_left, y + LEVEL_HEIGHT));
                child_left += spans[child.0] + gap;
            }

            self.connect(center, &child_centers, y + BLOCK_HEIGHT);
            // Reversed so the first child is placed first
            stack.extend(child_slots.into_iter().rev());
        }
    }

    /// Draw the line joining a parent column to its children's columns
    fn connect(&mut self, parent: usize, children: &[usize], y: usize) {
        let (Some(&first), Some(&last)) = (children.first(), children.last()) else {
            return;
        };
        let lo = parent.min(first);
        let hi = parent.max(last);

        for x in lo..=hi {
            let glyph = box_glyph(x == parent, children.contains(&x), x > lo, x < hi);
            self.connectors.push(ConnectorCell { x, y, glyph });
        }
    }
}

/// Top-left canvas cell shown in the diagram viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pan {
    pub x: usize,
    pub y: usize,
}

impl Pan {
    /// Move as little as possible so a block fits in a viewport of the given
    /// size. A block wider than the viewport is aligned on its left edge.
    pub fn reveal(&mut self, placement: &Placement, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }

        if placement.x < self.x {
            self.x = placement.x;
        } else if placement.x + placement.width > self.x + width {
            self.x = (placement.x + placement.width - width).min(placement.x);
        }

        if placement.y < self.y {
            self.y = placement.y;
        } else if placement.y + BLOCK_HEIGHT > self.y + height {
            self.y = (placement.y + BLOCK_HEIGHT - height).min(placement.y);
        }
    }

    /// Keep the viewport from drifting past the end of the canvas
    pub fn clamp(&mut self, layout: &DiagramLayout, width: usize, height: usize) {
        self.x = self.x.min(layout.width().saturating_sub(width));
        self.y = self.y.min(layout.height().saturating_sub(height));
    }

    pub fn scroll(&mut self, dx: isize, dy: isize) {
        self.x = self.x.saturating_add_signed(dx);
        self.y = self.y.saturating_add_signed(dy);
    }
}

/// Width of a node block
pub fn block_width(node: &SearchNode) -> usize {
    node_label(node).width().max(1)
}

/// Left column, width and shape column of a block centred in its span
fn block_position(node: &SearchNode, left: usize, span: usize) -> (usize, usize, usize) {
    let width = block_width(node);
    let x = left + (span - width) / 2;
    (x, width, x + width / 2)
}

/// Subtree spans for the visible part of the tree, indexed by node id.
///
/// `visible` is in pre-order, so walking it backwards sees every child
/// before its parent.
fn measure(view: &TreeView, visible: &[NodeId], gap: usize) -> Vec<usize> {
    let mut spans = vec![0usize; view.len()];

    for &id in visible.iter().rev() {
        let Some(node) = view.get_node(id) else {
            continue;
        };

        let mut span = block_width(&node.value);
        if node.shows_children() {
            span = span.max(children_width(&node.children, gap, &spans));
        }
        spans[id.0] = span;
    }

    spans
}

fn children_width(children: &[NodeId], gap: usize, spans: &[usize]) -> usize {
    let total: usize = children.iter().map(|c| spans[c.0]).sum();
    total + gap * children.len().saturating_sub(1)
}

fn box_glyph(up: bool, down: bool, left: bool, right: bool) -> char {
    match (up, down, left, right) {
        (true, true, true, true) => '┼',
        (true, false, true, true) => '┴',
        (false, true, true, true) => '┬',
        (true, true, false, true) => '├',
        (true, true, true, false) => '┤',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, _, false, false) | (false, true, false, false) => '│',
        (false, false, _, _) => '─',
    }
}
