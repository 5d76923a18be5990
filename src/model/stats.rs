use super::search::SearchNode;
use super::tree::Tree;
use std::fmt;

/// Summary of a loaded search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    pub max_nodes: usize,
    pub min_nodes: usize,
    pub pruned: usize,
}

impl TreeStats {
    pub fn collect(tree: &Tree<SearchNode>) -> Self {
        let mut stats = TreeStats {
            depth: tree.depth(),
            ..Default::default()
        };
        for node in tree.iter() {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            if node.val.is_max {
                stats.max_nodes += 1;
            } else {
                stats.min_nodes += 1;
            }
            if node.val.pruned {
                stats.pruned += 1;
            }
        }
        stats
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:   {}", self.nodes)?;
        writeln!(f, "leaves:  {}", self.leaves)?;
        writeln!(f, "depth:   {}", self.depth)?;
        writeln!(f, "max:     {}", self.max_nodes)?;
        writeln!(f, "min:     {}", self.min_nodes)?;
        write!(f, "pruned:  {}", self.pruned)
    }
}
