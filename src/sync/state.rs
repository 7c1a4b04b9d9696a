/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Latch Observations
//!
//! Value types returned by the counting latches' `step` and `load`
//! operations.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

/// The outcome of a single `step()` on a counting latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatchStep {
    /// `true` only for the one step, across all threads, that moved the
    /// latch onto its threshold.
    pub flipped: bool,
    /// Whether the latch is latched after this step.
    pub is_latched: bool,
    /// The caller-visible count after this step. Pinned at the threshold
    /// once latched.
    pub count: i64,
}

impl LatchStep {
    /// The observed state, without the `flipped` flag.
    #[inline]
    pub fn state(&self) -> LatchState {
        LatchState {
            is_latched: self.is_latched,
            count: self.count,
        }
    }
}

impl From<LatchStep> for (bool, bool, i64) {
    #[inline]
    fn from(step: LatchStep) -> Self {
        (step.flipped, step.is_latched, step.count)
    }
}

impl fmt::Display for LatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (flipped: {}, latched: {})",
            self.count, self.flipped, self.is_latched
        )
    }
}

/// A snapshot of a counting latch, as returned by `load()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatchState {
    /// Whether the latch has reached its threshold.
    pub is_latched: bool,
    /// The caller-visible count.
    pub count: i64,
}

impl From<LatchState> for (bool, i64) {
    #[inline]
    fn from(state: LatchState) -> Self {
        (state.is_latched, state.count)
    }
}

impl fmt::Display for LatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (latched: {})", self.count, self.is_latched)
    }
}
