/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Up Counter
//!
//! Provides a counter that only ever counts up.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::sync::base_counter::BaseCounter;
use crate::sync::traits::Counter;

/// A thread-safe counter that increases by one on every step.
///
/// Unlike [`UpLatch`](crate::UpLatch) it has no threshold and never
/// saturates: it keeps going past any value, wrapping from `i64::MAX` to
/// `i64::MIN` if stepped that far.
///
/// # Example
///
/// ```rust
/// use prism3_latch::UpCounter;
///
/// let counter = UpCounter::new(-10);
/// assert_eq!(counter.step(), -9);
/// assert_eq!(counter.step(), -8);
/// assert_eq!(counter.load(), -8);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct UpCounter {
    base: BaseCounter,
}

impl UpCounter {
    /// Creates a new counter starting at `initial_value`.
    ///
    /// # Parameters
    ///
    /// * `initial_value` - The starting count. Any value is accepted.
    #[inline]
    pub fn new(initial_value: i64) -> Self {
        Self {
            base: BaseCounter::new(initial_value),
        }
    }

    /// Increments the count by one, returning the new count.
    ///
    /// # Memory Ordering
    ///
    /// Uses an `AcqRel` add-and-fetch, so concurrent steps are never lost
    /// or counted twice.
    ///
    /// # Returns
    ///
    /// The count after this step, wrapped at the `i64` boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::UpCounter;
    ///
    /// let counter = UpCounter::new(-1);
    /// assert_eq!(counter.step(), 0);
    /// ```
    #[inline]
    pub fn step(&self) -> i64 {
        self.base.step(1)
    }

    /// Returns the current count.
    ///
    /// Uses `Acquire` ordering.
    #[inline]
    pub fn load(&self) -> i64 {
        self.base.load()
    }
}

impl Counter for UpCounter {
    #[inline]
    fn step(&self) -> i64 {
        self.step()
    }

    #[inline]
    fn load(&self) -> i64 {
        self.load()
    }
}

impl Default for UpCounter {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for UpCounter {
    #[inline]
    fn from(initial_value: i64) -> Self {
        Self::new(initial_value)
    }
}

impl fmt::Debug for UpCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpCounter")
            .field("count", &self.load())
            .finish()
    }
}

impl fmt::Display for UpCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
