// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Backend-selected ordered set facade.
//!
//! [`KeySet`] wraps the three monomorphized tree instantiations behind one
//! runtime selector so callers (the benchmark driver in particular) can
//! choose a backend by name while every tree operation still dispatches
//! statically inside its variant.

use crate::error::ReedResult;
use crate::store::{ArrayStore, Key, LinkedStore, SkipStore};
use crate::tree::{BPlusTree, NodeId, Order};

type Slot = Option<NodeId>;

/// Node-store backend selector.
///
/// ## Variants
/// - `Array`: contiguous sorted array, binary-search lookup. Default.
/// - `Linked`: singly linked list, linear positional access.
/// - `Skiplist`: array mirrored by a skip list rebuilt on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StoreBackend {
    /// Contiguous sorted array backend.
    #[default]
    Array,

    /// Singly-linked-list backend.
    Linked,

    /// Skip-mirror benchmark baseline.
    Skiplist,
}

impl StoreBackend {
    /// Backend identifier as it appears on the CLI and in CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Linked => "linked",
            Self::Skiplist => "skiplist",
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of 32-bit signed keys over a selectable node store.
///
/// ## Example
/// ```rust
/// use reedset::{KeySet, Order, StoreBackend};
///
/// let mut set = KeySet::new(Order::new(64), StoreBackend::Array);
/// set.insert(42);
/// set.insert(42); // duplicate, ignored
/// assert!(set.search(42));
/// set.delete(7); // absent, ignored
/// set.delete(42);
/// assert!(!set.search(42));
/// assert_eq!(set.height(), 1);
/// ```
#[derive(Debug)]
pub enum KeySet {
    /// Tree over the contiguous array store.
    Array(BPlusTree<ArrayStore<Slot>>),

    /// Tree over the linked-list store.
    Linked(BPlusTree<LinkedStore<Slot>>),

    /// Tree over the skip-mirror store.
    Skiplist(BPlusTree<SkipStore<Slot>>),
}

impl KeySet {
    /// Create an empty set of the given order on the given backend.
    pub fn new(order: Order, backend: StoreBackend) -> Self {
        match backend {
            StoreBackend::Array => Self::Array(BPlusTree::new(order)),
            StoreBackend::Linked => Self::Linked(BPlusTree::new(order)),
            StoreBackend::Skiplist => Self::Skiplist(BPlusTree::new(order)),
        }
    }

    /// Backend this set was created with.
    pub fn backend(&self) -> StoreBackend {
        match self {
            Self::Array(_) => StoreBackend::Array,
            Self::Linked(_) => StoreBackend::Linked,
            Self::Skiplist(_) => StoreBackend::Skiplist,
        }
    }

    /// Membership test.
    pub fn search(&self, key: Key) -> bool {
        match self {
            Self::Array(tree) => tree.search(key),
            Self::Linked(tree) => tree.search(key),
            Self::Skiplist(tree) => tree.search(key),
        }
    }

    /// Insert a key; duplicates are ignored.
    pub fn insert(&mut self, key: Key) {
        match self {
            Self::Array(tree) => tree.insert(key),
            Self::Linked(tree) => tree.insert(key),
            Self::Skiplist(tree) => tree.insert(key),
        }
    }

    /// Delete a key; absent keys are ignored.
    pub fn delete(&mut self, key: Key) {
        match self {
            Self::Array(tree) => tree.delete(key),
            Self::Linked(tree) => tree.delete(key),
            Self::Skiplist(tree) => tree.delete(key),
        }
    }

    /// Tree height (>= 1).
    pub fn height(&self) -> usize {
        match self {
            Self::Array(tree) => tree.height(),
            Self::Linked(tree) => tree.height(),
            Self::Skiplist(tree) => tree.height(),
        }
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(tree) => tree.len(),
            Self::Linked(tree) => tree.len(),
            Self::Skiplist(tree) => tree.len(),
        }
    }

    /// True when the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        match self {
            Self::Array(tree) => tree.keys(),
            Self::Linked(tree) => tree.keys(),
            Self::Skiplist(tree) => tree.keys(),
        }
    }

    /// Run the structural consistency checker.
    pub fn validate(&self) -> ReedResult<()> {
        match self {
            Self::Array(tree) => tree.validate(),
            Self::Linked(tree) => tree.validate(),
            Self::Skiplist(tree) => tree.validate(),
        }
    }
}
