//! Slot storage for the ring buffer.
//!
//! `Slots<T>` is a fixed run of element slots, each either vacant or
//! occupied. The ring decides which slots hold its elements; this type
//! only stores, hands out and moves them.

use std::ops::Range;

use crate::error::{ContainerError, ContainerResult};

/// Owned, fallibly allocated element slots.
///
/// The length of the inner vector *is* the capacity.
pub(crate) struct Slots<T> {
    buf: Vec<Option<T>>,
}

impl<T> Slots<T> {
    /// Allocates `capacity` vacant slots.
    pub(crate) fn allocate(capacity: usize) -> ContainerResult<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| ContainerError::AllocationFailed {
                requested: capacity,
            })?;
        buf.resize_with(capacity, || None);
        Ok(Self { buf })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Grows or shrinks the buffer in place (realloc semantics).
    ///
    /// Slots below `min(old, new_capacity)` keep their contents. The caller
    /// must make sure no occupied slot lies at or past `new_capacity`.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> ContainerResult<()> {
        let old = self.buf.len();
        if new_capacity > old {
            self.buf
                .try_reserve_exact(new_capacity - old)
                .map_err(|_| ContainerError::AllocationFailed {
                    requested: new_capacity,
                })?;
            self.buf.resize_with(new_capacity, || None);
        } else {
            debug_assert!(self.buf[new_capacity..].iter().all(Option::is_none));
            self.buf.truncate(new_capacity);
            self.buf.shrink_to_fit();
        }
        Ok(())
    }

    /// Stores `value` in the vacant slot `index`.
    pub(crate) fn put(&mut self, index: usize, value: T) {
        debug_assert!(self.buf[index].is_none(), "slot {} is occupied", index);
        self.buf[index] = Some(value);
    }

    /// Moves the value out of slot `index`, leaving it vacant.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.buf.get_mut(index).and_then(Option::take)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index).and_then(Option::as_mut)
    }

    /// Moves the run `src` into `dst` starting at slot `at`.
    ///
    /// The source slots are left vacant.
    pub(crate) fn move_into(&mut self, src: Range<usize>, dst: &mut Slots<T>, at: usize) {
        let count = src.len();
        for (from, to) in self.buf[src].iter_mut().zip(&mut dst.buf[at..at + count]) {
            *to = from.take();
        }
    }

    /// Vacates every slot, dropping whatever they held.
    pub(crate) fn clear(&mut self) {
        self.buf.iter_mut().for_each(|slot| *slot = None);
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(slots: &Slots<String>) -> Vec<Option<&str>> {
        (0..slots.capacity())
            .map(|i| slots.get(i).map(String::as_str))
            .collect()
    }

    #[test]
    fn test_allocate_sets_capacity() {
        let slots: Slots<u32> = Slots::allocate(5).unwrap();
        assert_eq!(slots.capacity(), 5);
        assert!((0..5).all(|i| slots.get(i).is_none()));

        let empty: Slots<u32> = Slots::allocate(0).unwrap();
        assert_eq!(empty.capacity(), 0);
        assert_eq!(empty.get(0), None);
    }

    #[test]
    fn test_reallocate_keeps_prefix() {
        let mut slots = Slots::allocate(2).unwrap();
        slots.put(0, 10u32);
        slots.put(1, 20u32);

        slots.reallocate(6).unwrap();
        assert_eq!(slots.capacity(), 6);
        assert_eq!(slots.get(1), Some(&20));
        assert_eq!(slots.get(2), None);

        slots.reallocate(2).unwrap();
        assert_eq!(slots.capacity(), 2);
        assert_eq!(slots.take(1), Some(20));
        assert_eq!(slots.take(1), None);
        assert_eq!(slots.get(0), Some(&10));
    }

    #[test]
    fn test_move_into_other_buffer() {
        let mut src = Slots::allocate(4).unwrap();
        for (i, v) in ["a", "b", "c"].into_iter().enumerate() {
            src.put(i, v.to_string());
        }

        let mut dst = Slots::allocate(4).unwrap();
        src.move_into(1..3, &mut dst, 0);
        src.move_into(0..1, &mut dst, 2);

        assert_eq!(occupied(&dst), vec![Some("b"), Some("c"), Some("a"), None]);
        assert_eq!(occupied(&src), vec![None; 4]);
    }

    #[test]
    fn test_get_mut_and_clear() {
        let mut slots = Slots::allocate(3).unwrap();
        slots.put(2, String::from("x"));
        slots.get_mut(2).unwrap().push('y');
        assert_eq!(slots.get(2).map(String::as_str), Some("xy"));

        slots.clear();
        assert_eq!(occupied(&slots), vec![None; 3]);
        assert_eq!(slots.capacity(), 3);
    }

    #[test]
    fn test_oversized_allocation_fails() {
        let result: ContainerResult<Slots<u64>> = Slots::allocate(usize::MAX);
        assert_eq!(
            result.err(),
            Some(ContainerError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }
}
