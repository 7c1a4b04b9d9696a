/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Base Counter
//!
//! The unbounded stepping engine shared by [`DownCounter`](crate::DownCounter)
//! and [`UpCounter`](crate::UpCounter).
//!
//! # Author
//!
//! Haixing Hu

use crate::sync::cell::AtomicCell;

/// Raw accumulator with no floor, ceiling or latched state.
#[derive(Debug)]
pub(crate) struct BaseCounter {
    cell: AtomicCell,
}

impl BaseCounter {
    /// Creates a counter holding `initial_value`.
    #[inline]
    pub(crate) fn new(initial_value: i64) -> Self {
        Self {
            cell: AtomicCell::new(initial_value),
        }
    }

    /// Adds `delta` and returns the new value, wrapping on overflow.
    #[inline]
    pub(crate) fn step(&self, delta: i64) -> i64 {
        self.cell.add_and_get(delta)
    }

    /// Reads the raw value without changing it.
    #[inline]
    pub(crate) fn load(&self) -> i64 {
        self.cell.load()
    }
}
