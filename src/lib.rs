//! # Ringvec
//!
//! Generic growable containers, one implementation shared by every element
//! type.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `buffer`: the doubling dynamic array and the dual-ended ring buffer
//! - `list`: a singly linked list
//! - `tree`: a binary tree and an unbalanced binary search tree
//! - `render`: human-readable printing of container contents
//! - `config`: creation settings (initial capacity, growth ceiling)
//! - `error`: error types
//!
//! ## Quick Start
//!
//! ```
//! use ringvec::RingBuffer;
//!
//! let mut ring = RingBuffer::new(2).unwrap();
//! ring.push_back(2).unwrap();
//! ring.push_front(1).unwrap();
//! ring.push_back(3).unwrap(); // grows to capacity 4
//!
//! assert_eq!(ring.capacity(), 4);
//! assert_eq!(ring.pop_front(), Some(1));
//! assert_eq!(ring.to_string(), "RingBuffer<i32> [2, 3]");
//! ```

#![forbid(unsafe_code)]

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;
pub mod list;
pub mod render;
pub mod tree;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{DynArray, RingBuffer};
pub use config::{Config, ConfigError};
pub use error::{ContainerError, ContainerResult, PushError};
pub use list::LinkedList;
pub use render::Rendered;
pub use tree::{BinaryTree, SearchTree};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the platform.
///
/// Containers log growth and relinearization at `debug`/`trace` level and
/// refused growth at `warn`. Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag("Ringvec"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

// ============================================
// TESTS
// ============================================
