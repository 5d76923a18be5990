use serde::{Deserialize, Serialize};

/// The move that led to a search node.
///
/// The engine writes its own move structure here. The viewer keeps it as raw
/// JSON and never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(serde_json::Value);

impl Move {
    pub fn new(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// One node of an alpha-beta search, as dumped by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNode {
    /// Heuristic evaluation of the position
    pub h_val: i32,
    /// Lower pruning bound at this node
    pub alpha: i32,
    /// Upper pruning bound at this node
    pub beta: i32,
    pub mv: Move,
    /// True for the maximizing player's nodes
    pub is_max: bool,
    /// True if alpha-beta cut this branch off
    pub pruned: bool,
}

impl SearchNode {
    pub fn new(h_val: i32, alpha: i32, beta: i32, is_max: bool, pruned: bool) -> Self {
        Self {
            h_val,
            alpha,
            beta,
            mv: Move::default(),
            is_max,
            pruned,
        }
    }

    pub fn with_move(mut self, mv: Move) -> Self {
        self.mv = mv;
        self
    }
}
