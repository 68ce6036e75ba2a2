//! # Ring Buffer Implementation
//!
//! A growable circular buffer with push and pop at both ends.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots. The cars form
//! one queue that can start at any spot and wrap past the last spot back
//! to spot 0. New cars can join at either end of the queue. When the
//! track is full, a bigger track is built and the queue is moved over.
//!
//! ## Layout
//!
//! ```text
//!  not wrapped:  [ . . A B C D . . ]     start = 2, len = 4
//!  wrapped:      [ C D . . . . A B ]     start = 6, len = 4
//! ```
//!
//! Logical index `i` lives in physical slot `(start + i) % capacity`.

use std::fmt;
use std::iter::FusedIterator;

use crate::buffer::slots::Slots;
use crate::buffer::{check_limit, doubled_capacity};
use crate::config::Config;
use crate::error::{ContainerResult, PushError};
use crate::render::{display_item, Rendered};

/// A growable, double-ended circular buffer.
///
/// ## Properties
/// - O(1) amortized push at both ends, O(1) pop at both ends
/// - Capacity doubles when a push finds the buffer full
/// - Indexed access is by logical position, whatever the physical layout
/// - A zero-capacity ring never grows by itself; resize it first
pub struct RingBuffer<T> {
    /// The backing storage
    slots: Slots<T>,

    /// Physical slot of logical index 0
    start: usize,

    /// Number of occupied slots
    len: usize,

    /// Optional growth ceiling from the creation config
    limit: Option<usize>,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring buffer with room for `capacity` elements.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::RingBuffer;
    /// let ring: RingBuffer<i32> = RingBuffer::new(16).unwrap();
    /// assert_eq!(ring.capacity(), 16);
    /// assert!(ring.is_empty());
    /// ```
    pub fn new(capacity: usize) -> ContainerResult<Self> {
        Ok(Self {
            slots: Slots::allocate(capacity)?,
            start: 0,
            len: 0,
            limit: None,
        })
    }

    /// Creates a new ring buffer from a validated configuration.
    pub fn with_config(config: &Config) -> ContainerResult<Self> {
        config.check()?;
        let mut ring = Self::new(config.initial_capacity)?;
        ring.limit = config.max_capacity;
        Ok(ring)
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ring holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push has to grow the storage.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Physical slot holding the first element.
    ///
    /// Only useful to inspect the layout; logical access goes through
    /// [`RingBuffer::get`].
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns true if the occupied region does not wrap past the end of
    /// the storage.
    pub fn is_contiguous(&self) -> bool {
        self.start + self.len <= self.capacity()
    }

    /// Physical slot of logical index `index`. Requires capacity > 0.
    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.capacity()
    }

    /// Changes the allocated capacity, keeping every element in order.
    ///
    /// The capacity applied is `max(new_capacity, len)`. A request for `0`
    /// does nothing and returns the current capacity.
    ///
    /// ## What Happens (Plain English)
    ///
    /// 1. If the elements sit in one run that also fits the new size from
    ///    the same start, the storage is resized in place; `start` stays.
    /// 2. Otherwise a new block is allocated and the elements are copied
    ///    to its front in logical order (the tail run first, then the part
    ///    that wrapped to the beginning); `start` becomes 0.
    ///
    /// Returns the capacity actually applied. On failure the ring is left
    /// unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> ContainerResult<usize> {
        if new_capacity == 0 {
            return Ok(self.capacity());
        }
        let new_capacity = new_capacity.max(self.len);
        check_limit(new_capacity, self.limit)?;

        let capacity = self.capacity();
        let end = self.start + self.len;

        if end <= capacity && end <= new_capacity {
            self.slots.reallocate(new_capacity)?;
            // An empty ring may have `start == new_capacity` after a shrink
            if self.is_empty() {
                self.start = 0;
            }
            log::trace!(
                "RingBuffer resized in place: {} -> {} slots (start {})",
                capacity,
                new_capacity,
                self.start
            );
        } else {
            let mut fresh = Slots::allocate(new_capacity)?;

            // [BB..AAA] -> [AAA.....]
            let first_run = self.len.min(capacity - self.start);
            self.slots
                .move_into(self.start..self.start + first_run, &mut fresh, 0);
            // [AAA.....] -> [AAABB...]
            if end > capacity {
                self.slots
                    .move_into(0..end - capacity, &mut fresh, first_run);
            }

            self.slots = fresh;
            self.start = 0;
            log::debug!(
                "RingBuffer relinearized: {} -> {} slots ({} elements)",
                capacity,
                new_capacity,
                self.len
            );
        }

        Ok(new_capacity)
    }

    /// Makes room for one more element, doubling the capacity if full.
    fn reserve_one(&mut self) -> ContainerResult<()> {
        if self.is_full() {
            let grown = doubled_capacity(self.capacity())?;
            self.resize(grown)?;
        }
        Ok(())
    }

    /// Appends a value after the last element.
    ///
    /// The value lands in slot `(start + len) % capacity`. If the ring is
    /// full it grows first; when that fails, nothing changes and the
    /// value comes back inside the error.
    ///
    /// Returns the new length.
    pub fn push_back(&mut self, value: T) -> Result<usize, PushError<T>> {
        if let Err(cause) = self.reserve_one() {
            return Err(PushError::new(value, cause));
        }
        let slot = self.physical(self.len);
        self.slots.put(slot, value);
        self.len += 1;
        Ok(self.len)
    }

    /// Prepends a value before the first element.
    ///
    /// `start` moves back one slot (wrapping to the end of the storage)
    /// and the value is stored there. Growth and failure work as in
    /// [`RingBuffer::push_back`].
    ///
    /// Returns the new length.
    pub fn push_front(&mut self, value: T) -> Result<usize, PushError<T>> {
        if let Err(cause) = self.reserve_one() {
            return Err(PushError::new(value, cause));
        }
        let capacity = self.capacity();
        self.start = (self.start + capacity - 1) % capacity;
        self.slots.put(self.start, value);
        self.len += 1;
        Ok(self.len)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.physical(self.len - 1);
        self.len -= 1;
        self.slots.take(slot)
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.start;
        self.start = (self.start + 1) % self.capacity();
        self.len -= 1;
        self.slots.take(slot)
    }

    /// Returns the element at logical `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots.get(self.physical(index))
    }

    /// Mutable version of [`RingBuffer::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        self.slots.get_mut(slot)
    }

    /// Returns the first element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element without removing it.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns the logical index of the first element matching `predicate`.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::RingBuffer;
    /// let mut ring = RingBuffer::new(4).unwrap();
    /// ring.push_back(3).unwrap();
    /// ring.push_back(4).unwrap();
    /// ring.push_front(2).unwrap();
    /// ring.push_front(1).unwrap();
    /// let wanted = 3;
    /// assert_eq!(ring.find(|v| *v == wanted), Some(2));
    /// ```
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns an iterator over all elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
        self.start = 0;
    }

    /// Renders the contents with a custom per-element writer.
    ///
    /// ## Example
    /// ```
    /// # use ringvec::RingBuffer;
    /// let mut ring = RingBuffer::new(2).unwrap();
    /// ring.push_back('b').unwrap();
    /// ring.push_front('a').unwrap();
    /// let text = ring.render_with(|f, c| write!(f, "'{}'", c)).to_string();
    /// assert_eq!(text, "RingBuffer<char> ['a', 'b']");
    /// ```
    pub fn render_with<F>(&self, write_item: F) -> Rendered<Iter<'_, T>, F>
    where
        F: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    {
        Rendered::new::<T>("RingBuffer", self.iter(), write_item)
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copies the ring into a fresh one whose capacity equals the source
    /// length, laid out from slot 0 in logical order.
    pub fn try_clone(&self) -> ContainerResult<Self> {
        let mut copy = Self::new(self.len)?;
        copy.limit = self.limit;
        for value in self.iter() {
            // Capacity is exactly `len`, so these pushes never grow.
            if let Err(err) = copy.push_back(value.clone()) {
                return Err(err.cause);
            }
        }
        Ok(copy)
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("failed to clone RingBuffer: {}", err),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_with(display_item::<T>), f)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================
// ITERATOR
// ============================================

/// Iterator over a [`RingBuffer`] in logical order.
///
/// Walks logical indices `front..back`, so a wrapped ring reads the same
/// as a contiguous one.
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================
// TESTS
// ============================================
