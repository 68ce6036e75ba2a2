//! # Binary Search Tree
//!
//! An unbalanced binary search tree built on [`BinaryTree`].
//!
//! ## Plain English Explanation
//!
//! Every value goes left of a node if it is smaller, right otherwise
//! (equal values go right). Reading the tree left-to-right gives the
//! values in sorted order, which is how [`SearchTree::sort_list`] sorts a
//! linked list.
//!
//! The tree never rebalances: inserting already-sorted values produces a
//! tree shaped like a list.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::list::LinkedList;
use crate::tree::binary::{BinaryTree, TreeNode};

/// A binary search tree; in-order traversal yields sorted values.
pub struct SearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T: PartialOrd> SearchTree<T> {
    /// Creates an empty search tree.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::empty(),
        }
    }

    /// Inserts a value, keeping `left <= node <= right` at every node.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.tree.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left.root
            } else {
                &mut node.right.root
            };
        }
        *link = Some(Box::new(TreeNode {
            value,
            left: BinaryTree::empty(),
            right: BinaryTree::empty(),
        }));
    }

    /// Returns true if a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.tree.root.as_deref();
        while let Some(node) = current {
            current = match value.partial_cmp(&node.value) {
                Some(Ordering::Less) => node.left.root.as_deref(),
                Some(Ordering::Greater) => node.right.root.as_deref(),
                Some(Ordering::Equal) => return true,
                None => return false,
            };
        }
        false
    }

    /// Builds a tree by inserting each element of `list` in order.
    pub fn from_list(list: &LinkedList<T>) -> Self
    where
        T: Clone,
    {
        list.iter().cloned().collect()
    }

    /// Sorts a linked list by building a search tree from it.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::{LinkedList, SearchTree};
    /// let list: LinkedList<i32> = [5, 1, 4, 1, 3].into_iter().collect();
    /// let sorted = SearchTree::sort_list(&list);
    /// assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), vec![1, 1, 3, 4, 5]);
    /// ```
    pub fn sort_list(list: &LinkedList<T>) -> LinkedList<T>
    where
        T: Clone,
    {
        Self::from_list(list).into_list()
    }
}

impl<T> SearchTree<T> {
    /// Consumes the tree and returns its values in sorted order.
    pub fn into_list(mut self) -> LinkedList<T> {
        let mut sorted = Vec::new();
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        let mut current = self.tree.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.root.take();
                pending.push(node);
            }
            match pending.pop() {
                Some(mut node) => {
                    current = node.right.root.take();
                    let TreeNode { value, .. } = *node;
                    sorted.push(value);
                }
                None => break,
            }
        }

        sorted.into_iter().collect()
    }

    /// Returns an iterator over the values in sorted order.
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { pending: Vec::new() };
        iter.descend_left(&self.tree);
        iter
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Views the underlying binary tree.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T: PartialOrd> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T> From<SearchTree<T>> for BinaryTree<T> {
    fn from(search: SearchTree<T>) -> Self {
        search.tree
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator over a [`SearchTree`].
pub struct InOrder<'a, T> {
    pending: Vec<&'a TreeNode<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn descend_left(&mut self, mut tree: &'a BinaryTree<T>) {
        while let Some(node) = tree.root.as_deref() {
            self.pending.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.pending.pop()?;
        self.descend_left(&node.right);
        Some(&node.value)
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> LinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_insert_places_by_order() {
        let mut tree = SearchTree::new();
        for v in [5, 3, 8, 5] {
            tree.insert(v);
        }

        let shape = tree.as_tree();
        assert_eq!(shape.value(), Some(&5));
        assert_eq!(shape.left().unwrap().value(), Some(&3));
        assert_eq!(shape.right().unwrap().value(), Some(&8));
        // Equal values go right
        assert_eq!(shape.get(0b01), Some(&5));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_contains() {
        let tree: SearchTree<i32> = [4, 2, 6, 1].into_iter().collect();
        assert!(tree.contains(&1));
        assert!(tree.contains(&6));
        assert!(!tree.contains(&5));

        let floats: SearchTree<f64> = [1.0, 2.0].into_iter().collect();
        assert!(!floats.contains(&f64::NAN));
    }

    #[test]
    fn test_sort_list() {
        let list = list_of(&[9, 2, 7, 2, 0, 5]);
        let sorted = SearchTree::sort_list(&list);
        assert_eq!(sorted, list_of(&[0, 2, 2, 5, 7, 9]));
        // The input is left alone
        assert_eq!(list, list_of(&[9, 2, 7, 2, 0, 5]));
    }

    #[test]
    fn test_iter_matches_into_list() {
        let tree = SearchTree::from_list(&list_of(&[3, 1, 2]));
        let borrowed: Vec<_> = tree.iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3]);
        assert_eq!(tree.into_list(), list_of(&[1, 2, 3]));
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let tree: SearchTree<u32> = (0..5_000).collect();
        assert_eq!(tree.as_tree().depth(), 5_000);

        // Copying and printing a list-shaped tree must not recurse per level
        let shape = tree.as_tree().clone();
        assert_eq!(shape.depth(), 5_000);
        let text = shape.to_string();
        assert!(text.starts_with("BinaryTree<u32> (() <- 0 -> (() <- 1 -> "));
        assert!(text.ends_with(&format!("(4999){}", ")".repeat(4_999))));

        let list = tree.into_list();
        assert_eq!(list.len(), 5_000);
        assert_eq!(list.tail(), Some(&4_999));
    }

    #[test]
    fn test_empty() {
        let tree: SearchTree<i32> = SearchTree::new();
        assert!(tree.is_empty());
        assert!(tree.into_list().is_empty());
    }

    #[test]
    fn test_into_binary_tree() {
        let tree: SearchTree<i32> = [2, 1, 3].into_iter().collect();
        let plain: BinaryTree<i32> = tree.into();
        assert_eq!(plain.to_string(), "BinaryTree<i32> ((1) <- 2 -> (3))");
    }
}
