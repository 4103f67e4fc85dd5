// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The Cube: a four-level ordered associative container.
//!
//! - **types**: compile-time tuning knobs (fan-out step, leaf bounds)
//! - **node**: the W/X/Y axis node definitions and their split/merge
//!   mechanics
//! - **search**: the floor-search and positional-search descent
//!   primitives shared by the tree
//! - **tree**: [`Cube`] itself and its public operations

mod node;
mod search;
mod tree;
pub mod types;

pub use tree::Cube;
