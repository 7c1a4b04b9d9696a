/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-latch
//!
//! Lock-free, one-way synchronization primitives: a boolean latch, up/down
//! counting latches and up/down counters.
//!
//! ## Design Goals
//!
//! - **Single Source of Truth**: every primitive is one atomic `i64`
//! - **First-to-Cross**: exactly one caller observes each latch's transition
//! - **Saturation**: a latched counting latch reports its threshold forever,
//!   however many threads keep stepping it
//! - **Non-blocking**: no locks, no spinning, no waiting; callers poll
//!
//! ## Features
//!
//! - `tracing`: emits `tracing` events when latches are created, rejected
//!   or flipped
//!
//! ## Example
//!
//! ```rust
//! use prism3_latch::DownLatch;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let latch = Arc::new(DownLatch::new(100, 0).unwrap());
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let latch = latch.clone();
//!     let handle = thread::spawn(move || {
//!         let mut flips = 0;
//!         for _ in 0..20 {
//!             if latch.step().flipped {
//!                 flips += 1;
//!             }
//!         }
//!         flips
//!     });
//!     handles.push(handle);
//! }
//!
//! let flips: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
//!
//! assert_eq!(flips, 1);
//! assert_eq!(latch.load().count, 0);
//! assert!(latch.load().is_latched);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod sync;

// Re-export all primitives and traits
pub use sync::{
    BoolLatch,
    Counter,
    CountingLatch,
    Direction,
    DownCounter,
    DownLatch,
    Latch,
    LatchError,
    LatchState,
    LatchStep,
    UpCounter,
    UpLatch,
    MAX_LATCH_DISTANCE,
};
