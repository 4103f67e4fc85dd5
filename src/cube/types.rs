// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Compile-time tuning knobs for [`crate::Cube`].
//!
//! The original design exposes three constants: the inner-level fan-out
//! step, the leaf capacity, and the leaf merge threshold. Because these
//! values are fixed at compile time rather than supplied at runtime, they
//! are modeled here as `const` defaults validated by a `const`-time
//! assertion instead of a fallible runtime constructor.

/// Default fan-out step (`M` in the original design). Governs both the
/// increment by which the Cube's shared split threshold grows and the
/// initial threshold itself.
pub const DEFAULT_FANOUT_STEP: usize = 8;

/// Default leaf capacity (`Z_MAX`). A leaf splits once it would hold more
/// than this many entries.
pub const DEFAULT_LEAF_MAX: usize = 32;

/// Default leaf merge threshold (`Z_MIN`). A leaf below this count is a
/// merge candidate when its neighbor is also under threshold.
pub const DEFAULT_LEAF_MIN: usize = 8;

/// Validates a `(FANOUT_STEP, LEAF_MAX, LEAF_MIN)` triple at compile time.
///
/// Mirrors the constraint the original design states in prose: leaves must
/// be able to merge without immediately re-splitting (`LEAF_MIN * 2 <=
/// LEAF_MAX`), and the fan-out step must be large enough to make splitting
/// worthwhile (`FANOUT_STEP >= 4`).
pub const fn assert_valid_tuning(fanout_step: usize, leaf_max: usize, leaf_min: usize) {
    assert!(fanout_step >= 4, "FANOUT_STEP must be >= 4");
    assert!(leaf_max > 0, "LEAF_MAX must be > 0");
    assert!(
        leaf_min * 2 <= leaf_max,
        "LEAF_MIN must be at most LEAF_MAX / 2"
    );
}
