//! Property tests for the growth and ordering laws of the containers.

use std::collections::VecDeque;

use proptest::prelude::*;
use ringvec::{DynArray, RingBuffer};

/// One step against a ring buffer.
#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Resize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushBack),
        any::<i32>().prop_map(Op::PushFront),
        Just(Op::PopBack),
        Just(Op::PopFront),
        (0usize..40).prop_map(Op::Resize),
    ]
}

fn ring_contents(ring: &RingBuffer<i32>) -> Vec<i32> {
    ring.iter().copied().collect()
}

proptest! {
    /// Length tracks the push count; capacity is C0 * 2^k and never below length.
    #[test]
    fn array_growth(initial in 1usize..16, count in 0usize..300) {
        let mut array = DynArray::new(initial).unwrap();
        for n in 0..count {
            prop_assert_eq!(array.push(n).unwrap(), n + 1);
            let capacity = array.capacity();
            prop_assert!(capacity >= array.len());
            prop_assert_eq!(capacity % initial, 0);
            prop_assert!((capacity / initial).is_power_of_two());
        }
    }

    /// Pushing v1..vn then popping n times yields vn..v1.
    #[test]
    fn array_lifo(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut array = DynArray::new(1).unwrap();
        for &v in &values {
            array.push(v).unwrap();
        }
        for &v in values.iter().rev() {
            prop_assert_eq!(array.pop(), Some(v));
        }
        prop_assert_eq!(array.len(), 0);
        prop_assert_eq!(array.pop(), None);
    }

    /// Resizing never loses or reorders elements.
    #[test]
    fn array_resize_floor(values in prop::collection::vec(any::<u8>(), 1..50), request in 0usize..80) {
        let mut array = DynArray::new(1).unwrap();
        for &v in &values {
            array.push(v).unwrap();
        }
        let applied = array.resize(request).unwrap();
        prop_assert!(applied >= values.len());
        prop_assert_eq!(array.capacity(), applied);
        prop_assert_eq!(array.as_slice(), &values[..]);
    }

    /// Any sequence of ring operations behaves like a VecDeque.
    #[test]
    fn ring_matches_vecdeque(initial in 1usize..6, ops in prop::collection::vec(op(), 0..200)) {
        let mut ring = RingBuffer::new(initial).unwrap();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    model.push_back(v);
                    prop_assert_eq!(ring.push_back(v).unwrap(), model.len());
                }
                Op::PushFront(v) => {
                    model.push_front(v);
                    prop_assert_eq!(ring.push_front(v).unwrap(), model.len());
                }
                Op::PopBack => prop_assert_eq!(ring.pop_back(), model.pop_back()),
                Op::PopFront => prop_assert_eq!(ring.pop_front(), model.pop_front()),
                Op::Resize(n) => {
                    let applied = ring.resize(n).unwrap();
                    prop_assert!(applied >= model.len());
                }
            }
            prop_assert!(ring.len() <= ring.capacity());
            prop_assert!(ring.start() < ring.capacity());
            prop_assert_eq!(ring_contents(&ring), model.iter().copied().collect::<Vec<_>>());
        }
    }

    /// Growing a ring whose contents wrap keeps every logical index intact.
    #[test]
    fn ring_wrap_resize(shift in 0usize..8, extra in 1usize..20) {
        let mut ring = RingBuffer::new(8).unwrap();
        for _ in 0..shift {
            ring.push_back(-1).unwrap();
            ring.pop_front();
        }
        for v in 0..8 {
            ring.push_back(v).unwrap();
        }
        let before = ring_contents(&ring);

        ring.resize(8 + extra).unwrap();
        for (i, v) in before.iter().enumerate() {
            prop_assert_eq!(ring.get(i), Some(v));
        }
        prop_assert_eq!(ring.get(before.len()), None);
    }

    /// Find returns the lowest logical index, whatever the physical start.
    #[test]
    fn ring_find_lowest(shift in 0usize..4, target in 1i32..=4) {
        let mut ring = RingBuffer::new(4).unwrap();
        for _ in 0..shift {
            ring.push_front(0).unwrap();
            ring.pop_back();
        }
        for v in 1..=4 {
            ring.push_back(v).unwrap();
        }
        prop_assert_eq!(ring.find(|v| *v == target), Some((target - 1) as usize));
        prop_assert_eq!(ring.find(|v| *v > 4), None);
    }
}
