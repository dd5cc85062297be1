//! Interaction state of the three demo components, free of any terminal
//! or rendering concerns.

pub mod panel;
pub mod reorder;
pub mod seed;
pub mod tree;

pub use panel::PanelState;
pub use reorder::{DragEvent, DragOutcome, ItemId, ListItem, ListSnapshot, ReorderList};
pub use tree::{NodeKind, NodePath, ToggleOutcome, TreeExpansion, TreeNode, TreeRow};
