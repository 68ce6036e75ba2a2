//! # Binary Tree
//!
//! A plain binary tree of owned nodes, built bottom-up by joining subtrees.
//!
//! ## Addressing
//!
//! [`BinaryTree::get`] walks the tree along a bit path: bit 0 of the
//! address picks the direction at the root, bit 1 at the next level, and
//! so on (`0` = left, `1` = right). Once the bits run out the path keeps
//! going left. The walk stops at the last real node when the next child is
//! missing, so any address on a non-empty tree lands on some node.
//!
//! ```text
//!          1            get(0b0)  -> 2   (left, then 2 has no left child)
//!        /   \          get(0b01) -> 3   (right, then left is missing)
//!       2     3         get(0b11) -> 4   (right, right)
//!              \
//!               4
//! ```

use std::fmt;

pub(crate) struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) left: BinaryTree<T>,
    pub(crate) right: BinaryTree<T>,
}

impl<T> TreeNode<T> {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// A binary tree; the empty tree has no root.
pub struct BinaryTree<T> {
    pub(crate) root: Option<Box<TreeNode<T>>>,
}

impl<T> BinaryTree<T> {
    /// Creates the empty tree.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Creates a tree with a single node.
    pub fn leaf(value: T) -> Self {
        Self::connect(Self::empty(), Self::empty(), value)
    }

    /// Creates a new root holding `value` with the given subtrees.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::BinaryTree;
    /// let tree = BinaryTree::connect(BinaryTree::leaf(1), BinaryTree::empty(), 2);
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn connect(left: BinaryTree<T>, right: BinaryTree<T>, value: T) -> Self {
        Self {
            root: Some(Box::new(TreeNode { value, left, right })),
        }
    }

    /// Returns true for the empty tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns true if the root exists and has no children.
    pub fn is_leaf(&self) -> bool {
        self.root.as_deref().map_or(false, TreeNode::is_leaf)
    }

    /// The value at the root.
    pub fn value(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// The left subtree, if there is a root.
    pub fn left(&self) -> Option<&BinaryTree<T>> {
        self.root.as_deref().map(|node| &node.left)
    }

    /// The right subtree, if there is a root.
    pub fn right(&self) -> Option<&BinaryTree<T>> {
        self.root.as_deref().map(|node| &node.right)
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.walk().count()
    }

    /// Length of the longest branch, counted in nodes.
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, level)| level + 1).max().unwrap_or(0)
    }

    /// Number of nodes without children.
    pub fn leaves(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Follows the bit path `address` from the root.
    ///
    /// Returns `None` only for the empty tree.
    pub fn get(&self, address: u64) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        let mut address = address;
        loop {
            let branch = if address & 1 == 1 {
                &node.right
            } else {
                &node.left
            };
            match branch.root.as_deref() {
                Some(child) => {
                    node = child;
                    address >>= 1;
                }
                None => return Some(&node.value),
            }
        }
    }

    /// Mutable version of [`BinaryTree::get`].
    pub fn get_mut(&mut self, address: u64) -> Option<&mut T> {
        let mut node = self.root.as_deref_mut()?;
        let mut address = address;
        loop {
            let go_right = address & 1 == 1;
            let has_child = if go_right {
                !node.right.is_empty()
            } else {
                !node.left.is_empty()
            };
            if !has_child {
                return Some(&mut node.value);
            }
            let branch = if go_right {
                &mut node.right
            } else {
                &mut node.left
            };
            node = branch.root.as_deref_mut()?;
            address >>= 1;
        }
    }

    /// Pre-order walk yielding each node with its level (root = 0).
    fn walk(&self) -> Walk<'_, T> {
        Walk {
            stack: self.root.as_deref().map(|node| (node, 0)).into_iter().collect(),
        }
    }

    /// Renders the tree with a custom per-element writer.
    ///
    /// Empty trees print as `()`, leaves as `(v)`, and other nodes as
    /// `(left <- v -> right)`.
    pub fn render_with<F>(&self, write_item: F) -> RenderedTree<'_, T, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    {
        RenderedTree {
            tree: self,
            write_item,
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// Iterative so that degenerate (list-shaped) trees don't blow the stack.
impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.root.take());
            pending.extend(node.right.root.take());
        }
    }
}

// Post-order with an explicit stack: each node is rebuilt once both of
// its copied subtrees are on `built`.
impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Copy(&'a BinaryTree<T>),
            Join(&'a T),
        }

        let mut steps = vec![Step::Copy(self)];
        let mut built: Vec<BinaryTree<T>> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Copy(tree) => match tree.root.as_deref() {
                    None => built.push(Self::empty()),
                    Some(node) => {
                        steps.push(Step::Join(&node.value));
                        steps.push(Step::Copy(&node.right));
                        steps.push(Step::Copy(&node.left));
                    }
                },
                Step::Join(value) => {
                    let right = built.pop().unwrap_or_default();
                    let left = built.pop().unwrap_or_default();
                    built.push(Self::connect(left, right, value.clone()));
                }
            }
        }

        built.pop().unwrap_or_default()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_with(|f, v| write!(f, "{:?}", v)), f)
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryTree<{}> ",
            crate::render::short_type_name::<T>()
        )?;
        fmt::Display::fmt(&self.render_with(crate::render::display_item::<T>), f)
    }
}

struct Walk<'a, T> {
    stack: Vec<(&'a TreeNode<T>, usize)>,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = (&'a TreeNode<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level) = self.stack.pop()?;
        if let Some(right) = node.right.root.as_deref() {
            self.stack.push((right, level + 1));
        }
        if let Some(left) = node.left.root.as_deref() {
            self.stack.push((left, level + 1));
        }
        Some((node, level))
    }
}

/// `Display` adapter returned by [`BinaryTree::render_with`].
pub struct RenderedTree<'a, T, F> {
    tree: &'a BinaryTree<T>,
    write_item: F,
}

/// One pending piece of output while rendering a tree.
enum Piece<'a, T> {
    Tree(&'a BinaryTree<T>),
    Value(&'a T),
    Text(&'static str),
}

impl<T, F> RenderedTree<'_, T, F>
where
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, tree: &BinaryTree<T>) -> fmt::Result {
        // Pieces are pushed in reverse so they pop in print order.
        let mut pending = vec![Piece::Tree(tree)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Value(value) => (self.write_item)(f, value)?,
                Piece::Tree(tree) => match tree.root.as_deref() {
                    None => f.write_str("()")?,
                    Some(node) if node.is_leaf() => {
                        f.write_str("(")?;
                        (self.write_item)(f, &node.value)?;
                        f.write_str(")")?;
                    }
                    Some(node) => {
                        pending.push(Piece::Text(")"));
                        pending.push(Piece::Tree(&node.right));
                        pending.push(Piece::Text(" -> "));
                        pending.push(Piece::Value(&node.value));
                        pending.push(Piece::Text(" <- "));
                        pending.push(Piece::Tree(&node.left));
                        pending.push(Piece::Text("("));
                    }
                },
            }
        }
        Ok(())
    }
}

impl<T, F> fmt::Display for RenderedTree<'_, T, F>
where
    F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, self.tree)
    }
}

// ============================================
// TESTS
// ============================================
