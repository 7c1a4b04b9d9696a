/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Down Counter
//!
//! Provides a counter that only ever counts down.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::sync::base_counter::BaseCounter;
use crate::sync::traits::Counter;

/// A thread-safe counter that decreases by one on every step.
///
/// Unlike [`DownLatch`](crate::DownLatch) it has no threshold and never
/// saturates: it passes zero and keeps going, wrapping from `i64::MIN` to
/// `i64::MAX` if stepped that far.
///
/// # Example
///
/// ```rust
/// use prism3_latch::DownCounter;
///
/// let counter = DownCounter::new(1);
/// assert_eq!(counter.step(), 0);
/// assert_eq!(counter.step(), -1);
/// assert_eq!(counter.load(), -1);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct DownCounter {
    base: BaseCounter,
}

impl DownCounter {
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

    /// Decrements the count by one, returning the new count.
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
    /// use prism3_latch::DownCounter;
    ///
    /// let counter = DownCounter::new(1);
    /// assert_eq!(counter.step(), 0);
    /// ```
    #[inline]
    pub fn step(&self) -> i64 {
        self.base.step(-1)
    }

    /// Returns the current count.
    ///
    /// Uses `Acquire` ordering.
    #[inline]
    pub fn load(&self) -> i64 {
        self.base.load()
    }
}

impl Counter for DownCounter {
    #[inline]
    fn step(&self) -> i64 {
        self.step()
    }

    #[inline]
    fn load(&self) -> i64 {
        self.load()
    }
}

impl Default for DownCounter {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for DownCounter {
    #[inline]
    fn from(initial_value: i64) -> Self {
        Self::new(initial_value)
    }
}

impl fmt::Debug for DownCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownCounter")
            .field("count", &self.load())
            .finish()
    }
}

impl fmt::Display for DownCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
