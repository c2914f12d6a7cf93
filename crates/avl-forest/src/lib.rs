//! Height-balanced (AVL) ordered tree.
//!
//! Every node owns its children through an `Option<Box<_>>` slot, so
//! rotations are ownership swaps and no node is ever shared or left
//! dangling. The tree itself is nothing but its root link; size and height
//! are derived on demand.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`], [`Link`] and the read-only [`Node`] view |
//! [`util`] | rotations, `insert`, `delete`, lookups, traversals, `destroy`, invariant checks |
//! [`iter`] | lazy [`InOrder`] / [`PreOrder`] iterators |
//! [`tree`] | [`AvlTree`], the owning wrapper most callers want |
//! [`print`] | tree-dump and `value(height)` printers |
//! [`cli`] | argument parsing and rendering for the `avl-tree` binary |
//!
//! # Example
//!
//! ```
//! use avl_forest::{AvlTree, Node};
//!
//! let mut tree = AvlTree::from_values([1, 2, 3]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(2));
//! assert!(!tree.insert(2));
//! assert!(tree.delete(&1));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

pub mod cli;
pub mod error;
pub mod iter;
pub mod print;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tree;
pub mod types;
pub mod util;

pub use error::InvariantError;
pub use iter::{InOrder, PreOrder};
pub use tree::AvlTree;
pub use types::{AvlNode, Link, Node};
pub use util::{
    assert_avl_tree, balance_factor, delete, destroy, find, find_minimum, height, insert,
    rotate_left, rotate_right, traverse_in_order, traverse_pre_order,
};
