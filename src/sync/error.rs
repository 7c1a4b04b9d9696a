/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Latch Errors
//!
//! Construction-time errors for the counting latches. Once a latch has been
//! constructed none of its operations can fail.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use thiserror::Error;

/// The direction in which a counting latch moves toward its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Counts down from the initial value to a lower threshold.
    Down,
    /// Counts up from the initial value to a higher threshold.
    Up,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Down => f.write_str("down"),
            Direction::Up => f.write_str("up"),
        }
    }
}

/// Errors reported when a counting latch is given invalid arguments.
///
/// Both kinds indicate a programming error in the caller: no latch is
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LatchError {
    /// The initial value is on the wrong side of (or equal to) the
    /// threshold for the latch's direction.
    #[error(
        "initial value {initial_value} must be {} than the threshold {threshold} ({direction} latch)",
        required_relation(.direction)
    )]
    InvalidDirection {
        /// The direction of the latch being constructed.
        direction: Direction,
        /// The rejected initial value.
        initial_value: i64,
        /// The rejected threshold.
        threshold: i64,
    },

    /// The distance between initial value and threshold is larger than
    /// [`MAX_LATCH_DISTANCE`](crate::MAX_LATCH_DISTANCE).
    #[error("latch distance between {initial_value} and {threshold} exceeds maximum")]
    DistanceExceedsMaximum {
        /// The rejected initial value.
        initial_value: i64,
        /// The rejected threshold.
        threshold: i64,
    },
}

fn required_relation(direction: &Direction) -> &'static str {
    match direction {
        Direction::Down => "greater",
        Direction::Up => "less",
    }
}

impl LatchError {
    /// Returns the direction carried by an `InvalidDirection` error.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            LatchError::InvalidDirection { direction, .. } => Some(*direction),
            LatchError::DistanceExceedsMaximum { .. } => None,
        }
    }
}

/// Result type for latch construction.
pub type Result<T> = std::result::Result<T, LatchError>;
