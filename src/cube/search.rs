// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Descent primitives shared by key search and positional search.
//!
//! The W and X levels use a halving descent (binary-search-like, but
//! walking from the top of the range downward); the Y and Z levels use a
//! quartering descent that chains up to three quarter-jumps before falling
//! back to a linear walk. Both schedules terminate in a short linear scan.
//! This asymmetry is a deliberate cache-tuning choice for the design's
//! higher fan-out at the inner levels and is preserved rather than
//! unified into a single binary search.

/// Finds the largest index `i` such that `arr[i] <= key`, using a halving
/// descent from the top of the range. Assumes `arr` is non-empty and
/// `key >= arr[0]`.
pub(crate) fn floor_halving(arr: &[i32], key: i32) -> usize {
    let mut top = arr.len() - 1;
    let mut mid = top;
    while mid > 3 {
        mid /= 2;
        if arr[top - mid] > key {
            top -= mid;
        }
    }
    while top > 0 && arr[top] > key {
        top -= 1;
    }
    top
}

/// Finds the largest index `i` such that `arr[i] <= key`, using a
/// quartering descent that chains up to three quarter-jumps per step
/// before falling back to a linear walk. Assumes `arr` is non-empty and
/// `key >= arr[0]`.
pub(crate) fn floor_quartered(arr: &[i32], key: i32) -> usize {
    let mut top = arr.len() - 1;
    let mut mid = top;
    while mid > 7 {
        mid /= 4;
        if arr[top - mid] > key {
            top -= mid;
            if arr[top - mid] > key {
                top -= mid;
                if arr[top - mid] > key {
                    top -= mid;
                }
            }
        }
    }
    while top > 0 && arr[top] > key {
        top -= 1;
    }
    top
}

/// Locates which slot a target rank falls in, given each slot's size
/// (volume), descending forward from the start when the target is in the
/// first half of the total and backward from the end otherwise. Returns
/// `(slot, offset_within_slot)`.
///
/// This collapses the original's separate forward/backward code paths
/// into one bidirectional walk; the cost characteristic (at most half the
/// slots visited) is unchanged, only the control flow is unified.
pub(crate) fn locate_rank(sizes: &[usize], target: usize) -> (usize, usize) {
    let total: usize = sizes.iter().sum();
    debug_assert!(target < total);
    if target < total / 2 {
        let mut remaining = target;
        for (i, &size) in sizes.iter().enumerate() {
            if remaining < size {
                return (i, remaining);
            }
            remaining -= size;
        }
    } else {
        let mut remaining_from_end = total - target - 1;
        for (i, &size) in sizes.iter().enumerate().rev() {
            if remaining_from_end < size {
                return (i, size - 1 - remaining_from_end);
            }
            remaining_from_end -= size;
        }
    }
    unreachable!("target < total guarantees a slot is found")
}
