/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Trace Macro
//!
//! Forwards diagnostic events to `tracing` when the `tracing` feature is
//! enabled, and expands to nothing otherwise.
//!
//! # Author
//!
//! Haixing Hu

/// Emits a `tracing` event at the given level.
///
/// # Parameters
///
/// * `$level` - One of the `tracing` event macros (`trace`, `debug`, ...)
/// * `$arg` - The arguments passed verbatim to that macro
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}
