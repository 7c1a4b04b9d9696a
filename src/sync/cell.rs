/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cell
//!
//! The single 64-bit signed atomic word every latch and counter is built on.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

#[cfg(loom)]
use loom::sync::atomic::{AtomicI64, Ordering};
#[cfg(not(loom))]
use std::sync::atomic::{AtomicI64, Ordering};

/// Atomic 64-bit signed integer with fixed memory orderings.
///
/// # Memory Ordering Strategy
///
/// - **Read operations** (`load`): `Acquire`.
/// - **Write operations** (`store`): `Release`.
/// - **Read-Modify-Write** (`add_and_get`, `compare_set`): `AcqRel`, with
///   `Acquire` on CAS failure.
///
/// Unlike a plain counter, the arithmetic here is not `Relaxed`: a step
/// that observes a latch crossing must see every write made before the
/// steps that preceded it.
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub(crate) struct AtomicCell {
    inner: AtomicI64,
}

impl AtomicCell {
    /// Creates a new cell holding `value`.
    #[inline]
    pub(crate) fn new(value: i64) -> Self {
        Self {
            inner: AtomicI64::new(value),
        }
    }

    /// Loads the current value with `Acquire` ordering.
    #[inline]
    pub(crate) fn load(&self) -> i64 {
        self.inner.load(Ordering::Acquire)
    }

    /// Stores `value` unconditionally with `Release` ordering.
    #[inline]
    pub(crate) fn store(&self, value: i64) {
        self.inner.store(value, Ordering::Release);
    }

    /// Adds `delta`, returning the new value.
    ///
    /// Wraps around on overflow, as `fetch_add` does.
    #[inline]
    pub(crate) fn add_and_get(&self, delta: i64) -> i64 {
        self.inner
            .fetch_add(delta, Ordering::AcqRel)
            .wrapping_add(delta)
    }

    /// Compares and sets the value atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    #[inline]
    pub(crate) fn compare_set(&self, current: i64, new: i64) -> Result<(), i64> {
        self.inner
            .compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
    }
}

impl fmt::Debug for AtomicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("value", &self.load())
            .finish()
    }
}
