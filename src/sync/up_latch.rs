/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Up Latch
//!
//! Provides a latch that counts up from an initial value to a higher
//! threshold.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::sync::base_latch::{
    checked_distance,
    BaseLatch,
};
use crate::sync::error::{
    Direction,
    Result,
};
use crate::sync::state::{
    LatchState,
    LatchStep,
};
use crate::sync::traits::{
    CountingLatch,
    Latch,
};

/// A unidirectional latch that counts up to a higher threshold.
///
/// Each [`step`](Self::step) raises the count by one. The step that reaches
/// `threshold` reports `flipped == true`; from then on the count stays at
/// `threshold` however many more steps are taken.
///
/// # Example
///
/// ```rust
/// use prism3_latch::UpLatch;
///
/// let latch = UpLatch::new(-2, 0).unwrap();
/// assert_eq!(latch.load().count, -2);
///
/// let step = latch.step();
/// assert!(!step.flipped);
/// assert_eq!(step.count, -1);
///
/// let step = latch.step();
/// assert!(step.flipped);
/// assert!(step.is_latched);
/// assert_eq!(step.count, 0);
///
/// let step = latch.step();
/// assert!(!step.flipped);
/// assert_eq!(step.count, 0);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct UpLatch {
    base: BaseLatch,
    threshold: i64,
}

impl UpLatch {
    /// Creates a new up latch.
    ///
    /// # Parameters
    ///
    /// * `initial_value` - The starting count; must be less than
    ///   `threshold`.
    /// * `threshold` - The count at which the latch latches.
    ///
    /// # Errors
    ///
    /// * [`LatchError::InvalidDirection`](crate::LatchError::InvalidDirection)
    ///   if `initial_value >= threshold`.
    /// * [`LatchError::DistanceExceedsMaximum`](crate::LatchError::DistanceExceedsMaximum)
    ///   if `threshold - initial_value` exceeds
    ///   [`MAX_LATCH_DISTANCE`](crate::MAX_LATCH_DISTANCE).
    ///
    /// # Returns
    ///
    /// An unlatched latch whose count is `initial_value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::UpLatch;
    ///
    /// let latch = UpLatch::new(-2, 0).unwrap();
    /// assert_eq!(latch.load().count, -2);
    /// assert!(UpLatch::new(0, -2).is_err());
    /// ```
    pub fn new(initial_value: i64, threshold: i64) -> Result<Self> {
        let distance = checked_distance(Direction::Up, initial_value, threshold)?;
        Ok(Self {
            base: BaseLatch::new(distance),
            threshold,
        })
    }

    /// Raises the count by one.
    ///
    /// Once latched, further steps leave the count at the threshold and
    /// report `flipped == false`.
    ///
    /// # Memory Ordering
    ///
    /// The step is one `AcqRel` add-and-fetch on the latch's cell. The
    /// crossing step additionally stores the latched floor with `Release`
    /// ordering. Every step is therefore ordered after all steps that
    /// preceded it.
    ///
    /// # Returns
    ///
    /// The step outcome; `count` never goes above the threshold. Exactly one
    /// call, across all threads, returns `flipped == true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::UpLatch;
    ///
    /// let latch = UpLatch::new(-2, 0).unwrap();
    /// assert_eq!(latch.step().count, -1);
    /// assert!(latch.step().flipped);
    /// assert_eq!(latch.step().count, 0);
    /// ```
    #[inline]
    pub fn step(&self) -> LatchStep {
        let progress = self.base.step();
        LatchStep {
            flipped: progress.flipped,
            is_latched: progress.is_latched,
            count: self.threshold - progress.distance,
        }
    }

    /// Observes the latch without changing it.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Returns
    ///
    /// Whether the latch is latched, and the current count (the threshold
    /// once latched).
    #[inline]
    pub fn load(&self) -> LatchState {
        let (is_latched, distance) = self.base.load();
        LatchState {
            is_latched,
            count: self.threshold - distance,
        }
    }

    /// Returns the threshold.
    #[inline]
    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}

impl Latch for UpLatch {
    #[inline]
    fn is_latched(&self) -> bool {
        self.load().is_latched
    }
}

impl CountingLatch for UpLatch {
    #[inline]
    fn step(&self) -> LatchStep {
        self.step()
    }

    #[inline]
    fn load(&self) -> LatchState {
        self.load()
    }

    #[inline]
    fn threshold(&self) -> i64 {
        self.threshold
    }
}

impl fmt::Debug for UpLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.load();
        f.debug_struct("UpLatch")
            .field("count", &state.count)
            .field("threshold", &self.threshold)
            .field("latched", &state.is_latched)
            .finish()
    }
}

impl fmt::Display for UpLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load().count)
    }
}
