/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Base Counting Latch
//!
//! The state machine shared by [`DownLatch`](crate::DownLatch) and
//! [`UpLatch`](crate::UpLatch). It tracks the remaining distance to the
//! threshold and counts it down to zero; the public latches only remap that
//! distance into their own direction.
//!
//! # Author
//!
//! Haixing Hu

use crate::sync::cell::AtomicCell;
use crate::sync::error::{
    Direction,
    LatchError,
    Result,
};

/// The largest distance allowed between a counting latch's initial value
/// and its threshold.
pub const MAX_LATCH_DISTANCE: i64 = i64::MAX;

/// Written to the cell by the step that crosses the threshold.
///
/// Any value below 1 reads as latched. Resetting to a value this far below
/// zero leaves room for 2^62 further racing decrements before the cell
/// could wrap back into the positive range.
pub(crate) const LATCHED_FLOOR: i64 = i64::MIN / 2;

/// Outcome of a step on the base latch, in terms of remaining distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Progress {
    pub(crate) flipped: bool,
    pub(crate) is_latched: bool,
    pub(crate) distance: i64,
}

/// Count-down-to-zero latch over a single atomic cell.
#[derive(Debug)]
pub(crate) struct BaseLatch {
    cell: AtomicCell,
}

impl BaseLatch {
    /// Creates a latch that needs `distance` steps to latch.
    ///
    /// `distance` must be at least 1; use [`checked_distance`] to obtain it.
    #[inline]
    pub(crate) fn new(distance: i64) -> Self {
        debug_assert!(distance >= 1, "latch distance must be positive");
        Self {
            cell: AtomicCell::new(distance),
        }
    }

    /// Decrements the remaining distance by one.
    pub(crate) fn step(&self) -> Progress {
        let distance = self.cell.add_and_get(-1);

        if distance > 0 {
            return Progress {
                flipped: false,
                is_latched: false,
                distance,
            };
        }

        let flipped = distance == 0;
        if flipped {
            self.cell.store(LATCHED_FLOOR);
            trace_event!(debug, "counting latch crossed its threshold");
        }

        Progress {
            flipped,
            is_latched: true,
            distance: 0,
        }
    }

    /// Reads the remaining distance without changing it.
    ///
    /// # Returns
    ///
    /// `(is_latched, distance)`; the distance is 0 once latched.
    pub(crate) fn load(&self) -> (bool, i64) {
        let distance = self.cell.load();
        if distance < 1 {
            (true, 0)
        } else {
            (false, distance)
        }
    }

    #[cfg(all(test, not(loom)))]
    fn raw(&self) -> i64 {
        self.cell.load()
    }
}

/// Validates a counting latch's arguments and computes its distance.
///
/// # Errors
///
/// * [`LatchError::InvalidDirection`] if `initial_value` is not strictly on
///   the `direction` side of `threshold`.
/// * [`LatchError::DistanceExceedsMaximum`] if the distance does not fit in
///   [`MAX_LATCH_DISTANCE`].
pub(crate) fn checked_distance(
    direction: Direction,
    initial_value: i64,
    threshold: i64,
) -> Result<i64> {
    let ordered = match direction {
        Direction::Down => initial_value > threshold,
        Direction::Up => initial_value < threshold,
    };
    if !ordered {
        trace_event!(
            debug,
            %direction,
            initial_value,
            threshold,
            "rejected latch with invalid direction"
        );
        return Err(LatchError::InvalidDirection {
            direction,
            initial_value,
            threshold,
        });
    }

    // i128 keeps e.g. (i64::MAX, -1) from overflowing.
    let distance = (i128::from(initial_value) - i128::from(threshold)).abs();
    match i64::try_from(distance) {
        Ok(distance) if distance <= MAX_LATCH_DISTANCE => {
            trace_event!(
                debug,
                %direction,
                initial_value,
                threshold,
                distance,
                "latch created"
            );
            Ok(distance)
        }
        _ => {
            trace_event!(
                debug,
                %direction,
                initial_value,
                threshold,
                "rejected latch with excessive distance"
            );
            Err(LatchError::DistanceExceedsMaximum {
                initial_value,
                threshold,
            })
        }
    }
}
