// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for ReedSet operations.
//!
//! Provides structured error handling with detailed context for debugging.
//! Library operations on the tree itself are infallible (set semantics make
//! duplicate inserts and absent deletes silent no-ops); errors arise at the
//! driver boundary (I/O, input parsing) and from the structural consistency
//! checker.

use std::fmt;

/// Standard Result type for all ReedSet operations.
pub type ReedResult<T> = Result<T, ReedError>;

/// Error types for ReedSet operations.
#[derive(Debug, Clone)]
pub enum ReedError {
    /// I/O error during file operations.
    IoError { operation: String, reason: String },

    /// Invalid benchmark input file (non-integer token or out-of-range value).
    InvalidInput {
        file: String,
        line: usize,
        reason: String,
    },

    /// A node store holds keys out of ascending order.
    UnsortedStore { node: u32, index: usize },

    /// A key lies outside the range its ancestors route into this node.
    KeyOutOfRange { node: u32, index: usize, key: i32 },

    /// A non-root node holds fewer keys than its occupancy minimum.
    NodeUnderflow { node: u32, keys: usize, min: usize },

    /// A node holds more keys than the order permits.
    NodeOverflow { node: u32, keys: usize, max: usize },

    /// An internal node is missing its leftmost child or a slot child.
    MissingChild { node: u32 },

    /// Leaves found at different depths.
    UnevenLeafDepth { expected: usize, found: usize },

    /// The leaf chain does not visit every leaf exactly once in key order.
    BrokenLeafChain { reason: String },

    /// A child's parent link does not point at its actual parent.
    BadParentLink { node: u32 },

    /// The tracked key count disagrees with the keys actually stored.
    KeyCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for ReedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { operation, reason } => {
                write!(f, "I/O error during '{}': {}", operation, reason)
            }
            Self::InvalidInput { file, line, reason } => {
                write!(f, "Invalid input in '{}' at line {}: {}", file, line, reason)
            }
            Self::UnsortedStore { node, index } => {
                write!(f, "Node {} store unsorted at index {}", node, index)
            }
            Self::KeyOutOfRange { node, index, key } => {
                write!(
                    f,
                    "Node {} key {} at index {} outside routed range",
                    node, key, index
                )
            }
            Self::NodeUnderflow { node, keys, min } => {
                write!(f, "Node {} underfull: {} keys (minimum {})", node, keys, min)
            }
            Self::NodeOverflow { node, keys, max } => {
                write!(f, "Node {} overfull: {} keys (maximum {})", node, keys, max)
            }
            Self::MissingChild { node } => {
                write!(f, "Internal node {} is missing a child link", node)
            }
            Self::UnevenLeafDepth { expected, found } => {
                write!(f, "Leaf at depth {} (expected {})", found, expected)
            }
            Self::BrokenLeafChain { reason } => {
                write!(f, "Broken leaf chain: {}", reason)
            }
            Self::BadParentLink { node } => {
                write!(f, "Node {} has a stale parent link", node)
            }
            Self::KeyCountMismatch { expected, found } => {
                write!(f, "Key count mismatch: tracked {}, stored {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ReedError {}

// Convenience conversion from std::io::Error
impl From<std::io::Error> for ReedError {
    fn from(err: std::io::Error) -> Self {
        ReedError::IoError {
            operation: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}
