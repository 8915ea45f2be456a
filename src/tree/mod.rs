// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! B+-Tree engine for the in-memory ordered-integer set.
//!
//! The tree owns an arena of nodes addressed by [`NodeId`]; each node
//! owns one node store of the chosen backend. Leaves chain forward in
//! key order, internal nodes route with copy-up separators (the key at
//! slot i is the minimum of the subtree behind child i + 1).
//!
//! ## Features
//!
//! - **Idempotent mutation**: duplicate inserts and absent deletes are
//!   silent no-ops
//! - **Split propagation**: leaf and internal overflow hand separators up
//!   to the root, growing the tree by one level at most
//! - **Borrow/merge rebalancing**: underflow borrows from a sibling
//!   first, merges only when both siblings sit at their minimum
//! - **Root shrinkage**: keyless internal roots collapse onto their only
//!   child until a valid root remains
//! - **Consistency checker**: `validate()` audits the whole structure
//!
//! ## Example Usage
//!
//! ```rust
//! use reedset::{ArrayStore, BPlusTree, Order};
//!
//! let mut tree: BPlusTree<ArrayStore<_>> = BPlusTree::new(Order::new(64));
//! for key in [12, 7, 31, 2, 5] {
//!     tree.insert(key);
//! }
//! assert!(tree.search(31));
//! tree.delete(31);
//! assert!(!tree.search(31));
//! assert_eq!(tree.keys(), vec![2, 5, 7, 12]);
//! ```

mod node;
mod tree;
mod types;



// Re-export public API
pub use tree::BPlusTree;
pub use types::{NodeId, Order};
