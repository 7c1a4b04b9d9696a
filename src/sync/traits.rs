/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Latch and Counter Traits
//!
//! Defines common traits for the one-way primitives, so that code can be
//! written against any latch direction or counter direction.
//!
//! # Author
//!
//! Haixing Hu

use crate::sync::state::{
    LatchState,
    LatchStep,
};

/// Common trait for all latches.
///
/// A latch transitions at most once, from unlatched to latched, and never
/// back.
///
/// # Author
///
/// Haixing Hu
pub trait Latch {
    /// Returns whether the latch has been latched.
    ///
    /// Uses `Acquire` ordering and never changes the latch's state.
    fn is_latched(&self) -> bool;
}

/// Trait for latches that count toward a threshold.
///
/// # Author
///
/// Haixing Hu
pub trait CountingLatch: Latch {
    /// Moves the count one unit toward the threshold.
    ///
    /// Exactly one call, across all threads, returns `flipped == true`.
    /// Once latched, every further call returns
    /// `(false, true, threshold)`.
    ///
    /// # Returns
    ///
    /// The outcome of this step.
    fn step(&self) -> LatchStep;

    /// Observes the latch without changing it.
    ///
    /// # Returns
    ///
    /// Whether the latch is latched and the current count.
    fn load(&self) -> LatchState;

    /// Returns the threshold at which the latch latches.
    fn threshold(&self) -> i64;
}

/// Trait for unbounded, non-latching counters.
///
/// # Author
///
/// Haixing Hu
pub trait Counter {
    /// Moves the count by one unit in the counter's direction.
    ///
    /// Wraps around at the `i64` boundary.
    ///
    /// # Returns
    ///
    /// The count after this step.
    fn step(&self) -> i64;

    /// Returns the current count without changing it.
    fn load(&self) -> i64;
}
