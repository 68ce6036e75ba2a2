//! # Tree Module
//!
//! Pointer-based trees:
//!
//! - [`BinaryTree`]: a plain binary tree, assembled from subtrees and
//!   addressed by bit paths
//! - [`SearchTree`]: an unbalanced binary search tree on top of it, able
//!   to sort a [`LinkedList`](crate::LinkedList)

mod binary;
mod search;

pub use binary::{BinaryTree, RenderedTree};
pub use search::{InOrder, SearchTree};
