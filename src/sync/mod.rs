/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # One-Way Synchronization Primitives
//!
//! Latches and counters that may be operated safely by multiple concurrent
//! threads. Each primitive owns exactly one atomic 64-bit cell; every
//! operation is a bounded number of atomic instructions, with no locks,
//! loops or waiting.
//!
//! - [`BoolLatch`]: fires once.
//! - [`DownLatch`] / [`UpLatch`]: count toward a threshold, then freeze.
//! - [`DownCounter`] / [`UpCounter`]: count forever, never latch.
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod trace_macro;

mod base_counter;
mod base_latch;
mod bool_latch;
mod cell;
mod down_counter;
mod down_latch;
mod error;
mod state;
mod traits;
mod up_counter;
mod up_latch;

pub use base_latch::MAX_LATCH_DISTANCE;
pub use bool_latch::BoolLatch;
pub use down_counter::DownCounter;
pub use down_latch::DownLatch;
pub use error::{
    Direction,
    LatchError,
    Result,
};
pub use state::{
    LatchState,
    LatchStep,
};
pub use traits::{
    Counter,
    CountingLatch,
    Latch,
};
pub use up_counter::UpCounter;
pub use up_latch::UpLatch;
