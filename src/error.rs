//! # Error Types Module
//!
//! This module defines the error types used by every container in the crate.
//!
//! ## Plain English Explanation
//!
//! Containers can only really fail in one way: they need more room and
//! can't get it. That happens when:
//!
//! - The allocator says no ("AllocationFailed")
//! - A configured ceiling says no ("CapacityLimit")
//! - The container has capacity 0, and doubling 0 is still 0 ("ZeroCapacity")
//!
//! Reading past the end or popping from an empty container is NOT an error:
//! those come back as `None`.

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN CONTAINER ERROR
// ============================================

/// The main error type for container operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The allocator refused to provide the requested slots
    ///
    /// ## Examples
    /// - Out of memory
    /// - Requested size overflows `isize::MAX` bytes
    #[error("allocation of {requested} slots failed")]
    AllocationFailed { requested: usize },

    /// Growing would exceed the configured maximum capacity
    ///
    /// ## What This Means
    /// The container was created with `Config::bounded`, and the
    /// resize asked for more than the bound allows.
    #[error("capacity {requested} exceeds the configured limit of {limit}")]
    CapacityLimit { requested: usize, limit: usize },

    /// Implicit growth of a zero-capacity container
    ///
    /// ## What This Means
    /// Pushes grow by doubling, and doubling 0 stays 0. Call `resize`
    /// with a non-zero capacity first.
    #[error("container has zero capacity and cannot grow by doubling")]
    ZeroCapacity,

    /// The configuration handed to a constructor is invalid
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ContainerError {
    /// Returns true if this error means "no memory could be obtained".
    ///
    /// A configured ceiling counts as an allocation failure: the caller
    /// asked for a bound, and the bound was hit.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. } | Self::CapacityLimit { .. }
        )
    }
}

// ============================================
// PUSH ERROR
// ============================================

/// A push that could not make room for its value.
///
/// ## Plain English
///
/// The container is left exactly as it was, and you get your value back
/// so nothing is lost.
#[derive(Error)]
#[error("push rejected: {cause}")]
pub struct PushError<T> {
    /// The value that was not pushed
    pub value: T,

    /// Why the growth step failed
    #[source]
    pub cause: ContainerError,
}

impl<T> PushError<T> {
    pub(crate) fn new(value: T, cause: ContainerError) -> Self {
        Self { value, cause }
    }

    /// Takes back the rejected value.
    pub fn into_value(self) -> T {
        self.value
    }
}

// Hand-written so `T` doesn't need to be `Debug` to inspect the cause.
impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses ContainerError
pub type ContainerResult<T> = Result<T, ContainerError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ContainerError::CapacityLimit {
            requested: 16,
            limit: 8,
        };
        let message = format!("{}", err);
        assert!(message.contains("16"));
        assert!(message.contains("limit of 8"));
    }

    #[test]
    fn test_allocation_failure_classification() {
        assert!(ContainerError::AllocationFailed { requested: 4 }.is_allocation_failure());
        assert!(ContainerError::CapacityLimit {
            requested: 4,
            limit: 2
        }
        .is_allocation_failure());
        assert!(!ContainerError::ZeroCapacity.is_allocation_failure());
    }

    #[test]
    fn test_push_error_returns_value() {
        let err = PushError::new(String::from("kept"), ContainerError::ZeroCapacity);
        assert!(err.to_string().starts_with("push rejected: "));
        assert!(err.to_string().contains("zero capacity"));
        assert_eq!(
            err.source().map(|cause| cause.to_string()),
            Some(ContainerError::ZeroCapacity.to_string())
        );
        assert_eq!(err.into_value(), "kept");
    }

    #[test]
    fn test_push_error_without_debug_value() {
        // Element types need neither Debug nor Display
        struct Opaque;

        let err = PushError::new(Opaque, ContainerError::ZeroCapacity);
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.to_string().contains("zero capacity"));
        assert!(format!("{:?}", boxed).starts_with("PushError"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ContainerError = ConfigError::ZeroLimit.into();
        match err {
            ContainerError::Config(ConfigError::ZeroLimit) => {} // Expected
            _ => panic!("Expected Config error variant"),
        }
    }
}
