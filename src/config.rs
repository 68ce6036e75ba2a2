//! # Configuration Module
//!
//! This module holds the settings a container is created with.
//!
//! ## Plain English Explanation
//!
//! Every container needs to know two things up front:
//! - How many slots to allocate right away
//! - Whether there is a ceiling it must never grow past
//!
//! The ceiling is handy when you want to bound memory use: once a resize
//! would cross it, the resize fails the same way an out-of-memory
//! allocation would.

use thiserror::Error;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// Creation settings shared by `DynArray` and `RingBuffer`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How many slots to allocate at creation
    ///
    /// ## Note
    /// `0` is legal, but implicit growth doubles the capacity, and
    /// doubling 0 stays 0. A zero-capacity container needs an explicit
    /// `resize` before its first push.
    pub initial_capacity: usize,

    /// Hard ceiling on the capacity, if any
    ///
    /// `None` means "grow until the allocator refuses".
    pub max_capacity: Option<usize>,
}

impl Config {
    /// Default number of slots allocated by `Config::default()`
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Creates a configuration with all default values
    pub fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
        }
    }

    /// Creates a configuration that never grows past `limit` slots
    ///
    /// ## When to Use
    /// When the container must stay within a known memory budget.
    pub fn bounded(limit: usize) -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY.min(limit),
            max_capacity: Some(limit),
        }
    }

    /// Creates a configuration with no initial storage
    ///
    /// Pushing will fail with `ZeroCapacity` until the container is resized.
    pub fn zero() -> Self {
        Self {
            initial_capacity: 0,
            ..Self::default()
        }
    }

    /// Replaces the initial capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(limit) = self.max_capacity {
            if limit == 0 {
                errors.push(ConfigError::ZeroLimit);
            }
            if self.initial_capacity > limit {
                errors.push(ConfigError::InitialAboveLimit {
                    initial: self.initial_capacity,
                    limit,
                });
            }
        }

        errors
    }

    /// Validates and returns the first problem found, if any
    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        match self.validate().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A ceiling of zero would make every push fail
    #[error("maximum capacity must be greater than zero")]
    ZeroLimit,

    /// The container would start out larger than it is allowed to be
    #[error("initial capacity {initial} exceeds maximum capacity {limit}")]
    InitialAboveLimit { initial: usize, limit: usize },
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.max_capacity, None);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_bounded_clamps_initial() {
        let config = Config::bounded(4);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_capacity, Some(4));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::bounded(0);
        assert_eq!(config.validate(), vec![ConfigError::ZeroLimit]);

        // Fix it
        config.max_capacity = Some(16);
        assert!(config.validate().is_empty());

        // Start above the ceiling
        config.initial_capacity = 32;
        assert_eq!(
            config.check(),
            Err(ConfigError::InitialAboveLimit {
                initial: 32,
                limit: 16
            })
        );
    }

    #[test]
    fn test_zero_preset() {
        let config = Config::zero().with_initial_capacity(0);
        assert_eq!(config.initial_capacity, 0);
        assert!(config.validate().is_empty());
    }
}
