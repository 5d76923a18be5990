// Search tree view state
//
// The loaded tree is flattened into an arena of node instances. Each instance
// owns its own expand state; collapsing a node drops the state of everything
// below it, like unmounting a subtree.

pub mod node;
pub mod view;

pub use node::{NodeId, NodeState, ViewNode};
pub use view::TreeView;
