// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Skip-mirror node store.
//!
//! The authoritative layout is the same pair of parallel vectors the array
//! backend uses. On top of them the store maintains a skip list over the
//! keys (no values) and rebuilds it from scratch after every key mutation.
//! Ordered lookup walks the skip list; positional access hits the arrays.
//!
//! This backend exists as a benchmark baseline: it measures what keeping
//! an auxiliary ordered index current costs, and is not expected to beat
//! the plain array.

use super::{Key, NodeStore};

/// Tallest tower a key may receive. With promotion probability 1/2 this
/// comfortably covers node capacities far beyond practical tree orders.
const MAX_LEVEL: usize = 12;

/// One tower in the skip list. Tower `i` mirrors the key at array
/// position `i`, so a lookup that lands on a tower knows its position.
#[derive(Debug, Clone)]
struct Tower {
    key: Key,
    next: [Option<usize>; MAX_LEVEL],
}

/// Skip list over the mirrored keys.
#[derive(Debug, Clone)]
struct SkipIndex {
    towers: Vec<Tower>,
    head: [Option<usize>; MAX_LEVEL],
    level: usize,
    rng: u64,
}

impl SkipIndex {
    fn new() -> Self {
        Self {
            towers: Vec::new(),
            head: [None; MAX_LEVEL],
            level: 1,
            rng: 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// xorshift64 step; deterministic so runs are reproducible.
    fn next_bit(&mut self) -> bool {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng = x;
        x & 1 == 1
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_LEVEL && self.next_bit() {
            height += 1;
        }
        height
    }

    /// Rebuild the whole list from a sorted key slice. Towers are linked
    /// left to right in one pass using per-level rightmost pointers.
    fn rebuild(&mut self, keys: &[Key]) {
        self.towers.clear();
        self.head = [None; MAX_LEVEL];
        self.level = 1;
        let mut rightmost: [Option<usize>; MAX_LEVEL] = [None; MAX_LEVEL];
        for (pos, &key) in keys.iter().enumerate() {
            let height = self.random_height();
            if height > self.level {
                self.level = height;
            }
            self.towers.push(Tower {
                key,
                next: [None; MAX_LEVEL],
            });
            for lvl in 0..height {
                match rightmost[lvl] {
                    Some(prev) => self.towers[prev].next[lvl] = Some(pos),
                    None => self.head[lvl] = Some(pos),
                }
                rightmost[lvl] = Some(pos);
            }
        }
    }

    /// Position of the first tower with key >= `key`, or the tower count.
    fn seek(&self, key: Key) -> usize {
        let mut below: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            loop {
                let next = match below {
                    None => self.head[lvl],
                    Some(t) => self.towers[t].next[lvl],
                };
                match next {
                    Some(n) if self.towers[n].key < key => below = Some(n),
                    _ => break,
                }
            }
        }
        match below {
            None => 0,
            Some(t) => t + 1,
        }
    }
}

/// Node store with array storage mirrored by a skip list.
///
/// ## Invariants
/// - `keys` / `vals` as in the array backend (strictly ascending, parallel)
/// - After every key mutation the skip list holds exactly the keys, with
///   tower `i` mirroring position `i`
#[derive(Debug, Clone)]
pub struct SkipStore<V> {
    keys: Vec<Key>,
    vals: Vec<V>,
    cap: usize,
    index: SkipIndex,
}

impl<V: Copy> NodeStore<V> for SkipStore<V> {
    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "node store capacity must be positive");
        Self {
            keys: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
            cap: capacity,
            index: SkipIndex::new(),
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.cap
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.vals.clear();
        self.index.rebuild(&self.keys);
    }

    fn key_at(&self, index: usize) -> Key {
        self.keys[index]
    }

    fn val_at(&self, index: usize) -> V {
        self.vals[index]
    }

    fn set_val(&mut self, index: usize, value: V) {
        // Values are not mirrored, so the skip list stays as it is.
        self.vals[index] = value;
    }

    fn lower_bound(&self, key: Key) -> usize {
        let pos = self.index.seek(key);
        debug_assert_eq!(pos, self.keys.partition_point(|&k| k < key));
        pos
    }

    fn insert_at(&mut self, index: usize, key: Key, value: V) {
        assert!(
            index <= self.keys.len(),
            "insert position {} past end {}",
            index,
            self.keys.len()
        );
        assert!(self.keys.len() < self.cap, "skip store is full");
        self.keys.insert(index, key);
        self.vals.insert(index, value);
        self.index.rebuild(&self.keys);
    }

    fn erase_at(&mut self, index: usize) {
        assert!(
            index < self.keys.len(),
            "erase position {} out of bounds (len {})",
            index,
            self.keys.len()
        );
        self.keys.remove(index);
        self.vals.remove(index);
        self.index.rebuild(&self.keys);
    }

    fn split_into(&mut self, right: &mut Self) -> Key {
        assert!(right.is_empty(), "split target must be empty");
        let n = self.keys.len();
        assert!(n >= 2, "split requires at least two entries");
        let keep = n / 2;
        right.keys.extend(self.keys.drain(keep..));
        right.vals.extend(self.vals.drain(keep..));
        self.index.rebuild(&self.keys);
        right.index.rebuild(&right.keys);
        right.keys[0]
    }
}
