// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! ReedSet - in-memory ordered-integer set on a B+-Tree with pluggable
//! node stores.
//!
//! A data-structure library and a comparative benchmark in one: the tree
//! algorithm is fixed, the per-node slot array behind it is swappable
//! between three backends that share one narrow contract.
//!
//! ## Features
//!
//! - **B+-Tree core**: copy-up separators, chained leaves, borrow/merge
//!   rebalancing, root growth and shrinkage
//! - **Pluggable node stores**: contiguous array (default), singly linked
//!   list, and a skip-list mirror kept as a benchmark baseline
//! - **Static dispatch**: each backend monomorphizes the tree; the
//!   [`KeySet`] facade adds runtime selection without touching the hot path
//! - **Consistency checker**: `validate()` audits ordering, routing,
//!   occupancy, leaf depth, chain and parent wiring
//! - **Benchmark driver**: the `reedbench` binary times insert/search/
//!   delete phases over integer files and emits CSV rows
//!
//! ## Quick Start
//!
//! ```rust
//! use reedset::{KeySet, Order, StoreBackend};
//!
//! let mut set = KeySet::new(Order::new(64), StoreBackend::Array);
//! for key in [31, 7, 12] {
//!     set.insert(key);
//! }
//! assert!(set.search(7));
//! set.delete(7);
//! assert!(!set.search(7));
//! assert_eq!(set.keys(), vec![12, 31]);
//! assert_eq!(set.height(), 1);
//! ```
//!
//! ## Architecture
//!
//! ReedSet is organized into modules:
//!
//! - **store**: the node-store contract and its three backends
//! - **tree**: the B+-Tree engine over any node store
//! - **set**: backend-selected facade used by callers and the driver
//! - **dataset**: benchmark input files (integers with `#` comments)
//! - **error**: structured `ReedError` / `ReedResult` plumbing

pub mod dataset;
pub mod error;
pub mod set;
pub mod store;
pub mod tree;




// Re-export commonly used types
pub use error::{ReedError, ReedResult};
pub use set::{KeySet, StoreBackend};
pub use store::{ArrayStore, Key, LinkedStore, NodeStore, SkipStore};
pub use tree::{BPlusTree, NodeId, Order};
