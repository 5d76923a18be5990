// Search tree data model
//
// Trees are read once from a JSON document and never change afterwards.
// Everything that varies while viewing lives in `view`.

pub mod load;
pub mod search;
pub mod stats;
pub mod tree;

pub use load::{LoadError, TreeLoader, BUNDLED_TREE};
pub use search::{Move, SearchNode};
pub use stats::TreeStats;
pub use tree::Tree;
