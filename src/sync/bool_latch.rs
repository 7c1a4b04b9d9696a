/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Boolean Latch
//!
//! Provides a one-shot boolean switch that may be operated safely by
//! multiple concurrent threads.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::sync::cell::AtomicCell;
use crate::sync::traits::Latch;

const UNLATCHED: i64 = 0;
const LATCHED: i64 = 1;

/// A one-way switch.
///
/// Starts unlatched. The first successful [`set`](Self::set) latches it;
/// there is no way back.
///
/// # Memory Ordering
///
/// `set` is a compare-and-swap with `AcqRel` ordering (`Acquire` on
/// failure) and `load` uses `Acquire`, so everything written before the
/// winning `set` is visible to any thread whose `load` returns `true`.
///
/// # Example
///
/// ```rust
/// use prism3_latch::BoolLatch;
/// use std::sync::Arc;
/// use std::thread;
///
/// let latch = Arc::new(BoolLatch::new());
/// let latch_clone = latch.clone();
///
/// let handle = thread::spawn(move || latch_clone.set());
///
/// assert!(handle.join().unwrap());
/// assert!(latch.load());
/// assert!(!latch.set());
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct BoolLatch {
    cell: AtomicCell,
}

impl BoolLatch {
    /// Creates a new, unlatched latch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::BoolLatch;
    ///
    /// let latch = BoolLatch::new();
    /// assert!(!latch.load());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            cell: AtomicCell::new(UNLATCHED),
        }
    }

    /// Latches the instance if it is not already latched.
    ///
    /// Has no effect on a latch that is already latched.
    ///
    /// # Memory Ordering
    ///
    /// A compare-and-swap from unlatched to latched with `AcqRel` ordering
    /// on success and `Acquire` on failure:
    /// - **Success**: all writes this thread made before `set` become
    ///   visible to any thread whose `load` then returns `true`.
    /// - **Failure**: the losing caller synchronizes with the winner.
    ///
    /// # Returns
    ///
    /// `true` if this call flipped the latch; `false` if it was already
    /// latched. Exactly one caller ever receives `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::BoolLatch;
    ///
    /// let latch = BoolLatch::new();
    /// assert!(latch.set());
    /// assert!(!latch.set());
    /// ```
    #[inline]
    pub fn set(&self) -> bool {
        let flipped = self.cell.compare_set(UNLATCHED, LATCHED).is_ok();
        if flipped {
            trace_event!(debug, "bool latch flipped");
        }
        flipped
    }

    /// Returns whether the latch is latched, without changing it.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering, pairing with the winning `set`.
    ///
    /// # Returns
    ///
    /// `true` once any caller has flipped the latch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_latch::BoolLatch;
    ///
    /// let latch = BoolLatch::new();
    /// assert!(!latch.load());
    /// latch.set();
    /// assert!(latch.load());
    /// ```
    #[inline]
    pub fn load(&self) -> bool {
        self.cell.load() != UNLATCHED
    }
}

impl Latch for BoolLatch {
    #[inline]
    fn is_latched(&self) -> bool {
        self.load()
    }
}

impl Default for BoolLatch {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoolLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolLatch")
            .field("latched", &self.load())
            .finish()
    }
}

impl fmt::Display for BoolLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
