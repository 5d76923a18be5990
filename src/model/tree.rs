use serde::{Deserialize, Deserializer, Serialize};

/// A generic recursive tree as written by the search engine.
///
/// `next` keeps the engine's child order, which is the left-to-right render
/// order. The engine stores children as `Vec<Option<Tree<T>>>`, so `null`
/// entries are accepted on input and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree<T> {
    /// Payload for this node
    pub val: T,
    /// Subtrees in insertion order
    #[serde(deserialize_with = "deserialize_children")]
    pub next: Vec<Tree<T>>,
}

fn deserialize_children<'de, D, T>(deserializer: D) -> Result<Vec<Tree<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Vec<Option<Tree<T>>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().collect())
}

impl<T> Tree<T> {
    /// Create a leaf
    pub fn new(val: T) -> Self {
        Self {
            val,
            next: Vec::new(),
        }
    }

    /// Create a node with the given children
    pub fn with_children(val: T, next: Vec<Tree<T>>) -> Self {
        Self { val, next }
    }

    /// Append a child subtree
    pub fn push(&mut self, next: Self) {
        self.next.push(next);
    }

    pub fn is_leaf(&self) -> bool {
        self.next.is_empty()
    }

    /// Total number of nodes, including this one
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.next.iter().map(|child| (child, depth + 1)));
        }
        max_depth
    }

    /// Pre-order iterator over all nodes
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder { stack: vec![self] }
    }
}

// Dropping children one level at a time keeps deep trees off the call stack
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.next);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.next);
        }
    }
}

/// Pre-order traversal of a [`Tree`], children visited left to right.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Tree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.next.iter().rev());
        Some(node)
    }
}
