//! # Linked List Module
//!
//! A singly linked list of owned nodes.
//!
//! ## Plain English Explanation
//!
//! Each element sits in its own little box, and each box knows where the
//! next one is. Adding at the front is instant; adding at the back means
//! walking the whole chain first.

use std::fmt;
use std::iter::FromIterator;

use crate::render::{display_item, Rendered};

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A singly linked list.
///
/// ## Properties
/// - O(1) push/pop at the front
/// - O(n) push/pop at the back, indexed access, and length
/// - Owns its nodes; dropping the list drops every element
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Creates a list holding a single element.
    pub fn singleton(value: T) -> Self {
        let mut list = Self::new();
        list.push_front(value);
        list
    }

    /// Returns true if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements by walking the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first element.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the last element.
    pub fn tail(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the element at `index`, or `None` if the list is shorter.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Mutable version of [`LinkedList::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor.map(|node| &mut node.value)
    }

    /// Inserts an element before the first one.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Appends an element after the last one.
    pub fn push_back(&mut self, value: T) {
        *self.last_link() = Some(Box::new(Node { value, next: None }));
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.value
        })
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref()?.next.is_some() {
            // Checked just above.
            link = &mut link.as_mut()?.next;
        }
        link.take().map(|node| node.value)
    }

    /// Moves every element of `other` to the end of this list.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        *self.last_link() = other.head.take();
    }

    /// The empty link after the last node.
    fn last_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Renders the contents with a custom per-element writer.
    pub fn render_with<F>(&self, write_item: F) -> Rendered<Iter<'_, T>, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    {
        Rendered::new::<T>("LinkedList", self.iter(), write_item)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink node by node; the default recursive drop can overflow the stack
// on long lists.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut link = &mut list.head;
        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            link = &mut node.next;
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_with(display_item::<T>), f)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
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
    fn test_singleton() {
        let list = LinkedList::singleton(10);
        assert_eq!(list.head(), Some(&10));
        assert_eq!(list.tail(), Some(&10));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_both_ends() {
        let mut list = LinkedList::singleton(10);
        list.push_back(15);
        list.push_front(5);

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![5, 10, 15]);
        assert_eq!(list.head(), Some(&5));
        assert_eq!(list.tail(), Some(&15));
    }

    #[test]
    fn test_length_grows() {
        let mut list = LinkedList::singleton(0);
        for n in 2..6 {
            list.push_back(0);
            assert_eq!(list.len(), n);
        }
    }

    #[test]
    fn test_get() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);

        *list.get_mut(1).unwrap() = 20;
        assert_eq!(list.get(1), Some(&20));
        assert!(list.get_mut(3).is_none());
    }

    #[test]
    fn test_pop_both_ends() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_append() {
        let mut list = list_of(&[1, 2]);
        list.append(list_of(&[3, 4]));
        assert_eq!(list, list_of(&[1, 2, 3, 4]));

        let mut empty = LinkedList::new();
        empty.append(list_of(&[7]));
        assert_eq!(empty, list_of(&[7]));
    }

    #[test]
    fn test_long_list_drop() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.tail(), Some(&199_999));
        drop(list);
    }

    #[test]
    fn test_display() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(list.to_string(), "LinkedList<i32> [1, 2, 3]");

        let words: LinkedList<&str> = ["Hello, world!", "again"].into_iter().collect();
        let text = words.render_with(|f, s| write!(f, "{:?}", s)).to_string();
        assert_eq!(text, "LinkedList<&str> [\"Hello, world!\", \"again\"]");
    }
}
