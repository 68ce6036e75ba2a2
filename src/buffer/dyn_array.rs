//! # Dynamic Array Implementation
//!
//! A growable array that keeps its elements packed at the front of its
//! storage and only pushes/pops at the end.
//!
//! ## Plain English
//!
//! Picture a shelf with numbered spots. Items always fill the shelf from
//! spot 0 onward. When the shelf is full, you buy one twice as long and
//! move everything over in the same order.

use std::fmt;

use crate::buffer::{check_limit, doubled_capacity};
use crate::config::Config;
use crate::error::{ContainerError, ContainerResult, PushError};
use crate::render::{display_item, Rendered};

/// A growable array with doubling growth.
///
/// ## Properties
/// - Occupied elements live in slots `[0, len)`
/// - `len <= capacity` at all times
/// - O(1) amortized push, O(1) pop and indexed access
/// - A zero-capacity array never grows by itself; resize it first
pub struct DynArray<T> {
    /// The stored elements, in order
    items: Vec<T>,

    /// Allocated slots as this array counts them; `Vec` may reserve more
    capacity: usize,

    /// Optional growth ceiling from the creation config
    limit: Option<usize>,
}

impl<T> DynArray<T> {
    /// Creates a new array with room for `capacity` elements.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::DynArray;
    /// let array: DynArray<i32> = DynArray::new(100).unwrap();
    /// assert_eq!(array.capacity(), 100);
    /// assert!(array.is_empty());
    /// ```
    pub fn new(capacity: usize) -> ContainerResult<Self> {
        let mut items = Vec::new();
        reserve_exact(&mut items, capacity)?;
        Ok(Self {
            items,
            capacity,
            limit: None,
        })
    }

    /// Creates a new array from a validated configuration.
    pub fn with_config(config: &Config) -> ContainerResult<Self> {
        config.check()?;
        let mut array = Self::new(config.initial_capacity)?;
        array.limit = config.max_capacity;
        Ok(array)
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the next push has to grow the storage.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the allocated capacity, keeping every element.
    ///
    /// The capacity applied is `max(new_capacity, len)`: shrinking never
    /// drops elements, so `resize(1)` shrinks to fit. A request for `0`
    /// does nothing and returns the current capacity.
    ///
    /// Returns the capacity actually applied. On failure the array is left
    /// unchanged. References into the array do not survive a resize.
    pub fn resize(&mut self, new_capacity: usize) -> ContainerResult<usize> {
        if new_capacity == 0 {
            return Ok(self.capacity());
        }
        let new_capacity = new_capacity.max(self.len());
        check_limit(new_capacity, self.limit)?;

        if new_capacity > self.capacity {
            reserve_exact(&mut self.items, new_capacity)?;
        } else {
            self.items.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
        log::trace!("DynArray resized to {} slots", new_capacity);
        Ok(new_capacity)
    }

    /// Appends a value at the end.
    ///
    /// If the array is full its capacity is doubled first. When that growth
    /// fails, nothing changes and the value comes back inside the error.
    ///
    /// Returns the new length.
    pub fn push(&mut self, value: T) -> Result<usize, PushError<T>> {
        if self.is_full() {
            if let Err(cause) = doubled_capacity(self.capacity()).and_then(|c| self.resize(c)) {
                return Err(PushError::new(value, cause));
            }
        }
        self.items.push(value);
        Ok(self.items.len())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the element at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable version of [`DynArray::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns the index of the first element matching `predicate`.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::DynArray;
    /// let mut array = DynArray::new(4).unwrap();
    /// for v in [1, 2, 3, 4] {
    ///     array.push(v).unwrap();
    /// }
    /// let wanted = 3;
    /// assert_eq!(array.find(|v| *v == wanted), Some(2));
    /// assert_eq!(array.find(|v| *v > 10), None);
    /// ```
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Views the occupied elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Views the occupied elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over all elements (first to last).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Renders the contents with a custom per-element writer.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::DynArray;
    /// let mut array = DynArray::new(2).unwrap();
    /// array.push('x').unwrap();
    /// array.push('y').unwrap();
    /// let text = array.render_with(|f, c| write!(f, "'{}'", c)).to_string();
    /// assert_eq!(text, "DynArray<char> ['x', 'y']");
    /// ```
    pub fn render_with<F>(&self, write_item: F) -> Rendered<std::slice::Iter<'_, T>, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    {
        Rendered::new::<T>("DynArray", self.iter(), write_item)
    }
}

impl<T: Clone> DynArray<T> {
    /// Copies the elements into a fresh array whose capacity equals the
    /// source length.
    pub fn try_clone(&self) -> ContainerResult<Self> {
        let mut items = Vec::new();
        reserve_exact(&mut items, self.len())?;
        items.extend(self.items.iter().cloned());
        Ok(Self {
            capacity: items.len(),
            items,
            limit: self.limit,
        })
    }
}

/// Makes sure `items` can hold `capacity` elements without reallocating.
fn reserve_exact<T>(items: &mut Vec<T>, capacity: usize) -> ContainerResult<()> {
    items
        .try_reserve_exact(capacity.saturating_sub(items.len()))
        .map_err(|_| ContainerError::AllocationFailed {
            requested: capacity,
        })
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("failed to clone DynArray: {}", err),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_with(display_item::<T>), f)
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================
// TESTS
// ============================================
