//! # Buffer Module
//!
//! This module provides the two growable, contiguous containers:
//!
//! - [`DynArray`]: a push/pop-at-the-end array ("vec")
//! - [`RingBuffer`]: a circular array with push/pop at both ends
//!
//! ## Plain English Explanation
//!
//! Both containers own one block of slots. When a push finds every slot
//! taken, the block is doubled. The array always keeps its elements at
//! the front of the block; the ring lets them start anywhere and wrap
//! around the end, which is what makes pushing at the front cheap.
//!
//! Neither container depends on the other. They share the growth rules
//! below; the ring keeps its elements in the slot store from `slots`.

mod dyn_array;
mod ring_buffer;
mod slots;

pub use dyn_array::DynArray;
pub use ring_buffer::{Iter as RingIter, RingBuffer};

use crate::error::{ContainerError, ContainerResult};

// ============================================
// GROWTH RULES
// Shared by both containers
// ============================================

/// Capacity to grow to when a push finds the container full.
///
/// Doubling; a zero capacity can't grow this way.
pub(crate) fn doubled_capacity(capacity: usize) -> ContainerResult<usize> {
    if capacity == 0 {
        return Err(ContainerError::ZeroCapacity);
    }
    capacity
        .checked_mul(2)
        .ok_or(ContainerError::AllocationFailed {
            requested: usize::MAX,
        })
}

/// Rejects capacities above the configured ceiling.
pub(crate) fn check_limit(requested: usize, limit: Option<usize>) -> ContainerResult<()> {
    match limit {
        Some(limit) if requested > limit => {
            log::warn!(
                "Refusing to grow to {} slots (limit {})",
                requested,
                limit
            );
            Err(ContainerError::CapacityLimit { requested, limit })
        }
        _ => Ok(()),
    }
}

// ============================================
// TESTS
// ============================================
