// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! binary-cube - an in-memory ordered associative container for `i32` keys.
//!
//! A drop-in replacement for a balanced binary search tree or a B-tree in
//! workloads dominated by in-memory point and positional lookups. Stores
//! keys in a four-level hierarchy of parallel arrays (named W, X, Y, Z
//! from outermost to innermost) rather than a pointer-linked tree, trading
//! pointer-chasing for cache-friendly array scans over small contiguous
//! runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use binary_cube::Cube;
//!
//! let mut cube: Cube<&str> = Cube::new();
//! cube.set_key(5, "five");
//! cube.set_key(3, "three");
//! cube.set_key(8, "eight");
//!
//! assert_eq!(cube.get_key(5), Some(&"five"));
//! assert_eq!(cube.get_index(0), Some(&"three")); // smallest key
//! assert_eq!(cube.len(), 3);
//!
//! cube.del_key(5);
//! assert_eq!(cube.get_key(5), None);
//! ```
//!
//! ## Architecture
//!
//! - **cube::tree**: [`Cube`], the public entry point
//! - **cube::node**: the W/X/Y axis nodes and their split/merge mechanics
//! - **cube::search**: the floor-search and positional-search descent
//!   primitives
//! - **cube::types**: compile-time tuning knobs
//!
//! ## Error Handling
//!
//! There is no error type. A key or rank that is not present is reported
//! as `None`, never as a panic or an `Err` — see [`Cube::get_key`] and
//! [`Cube::get_index`]. Out-of-memory is treated as fatal, the same way
//! `Vec` itself treats it.
//!
//! ## Concurrency
//!
//! `Cube` is single-writer, single-reader with no internal
//! synchronization. Wrap it in a `Mutex` or `RwLock` for multi-threaded
//! use.

pub mod cube;

pub use cube::Cube;
