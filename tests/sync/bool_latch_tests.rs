/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_latch::{
    BoolLatch,
    Latch,
};
use std::sync::atomic::{
    AtomicBool as StdAtomicBool,
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_new() {
    let latch = BoolLatch::new();
    assert!(!latch.load());
}

#[test]
fn test_default() {
    let latch = BoolLatch::default();
    assert!(!latch.load());
    assert!(!latch.is_latched());
}

#[test]
fn test_load_before_and_after_set() {
    let latch = BoolLatch::new();

    for _ in 0..4 {
        assert!(!latch.load());
    }

    assert!(latch.set());
    for _ in 0..4 {
        assert!(latch.load());
    }

    assert!(!latch.set());
    for _ in 0..4 {
        assert!(latch.load());
    }

    assert!(!latch.set());
    assert!(latch.is_latched());
}

#[test]
fn test_debug_display() {
    let latch = BoolLatch::new();
    assert_eq!(format!("{}", latch), "false");
    assert_eq!(format!("{:?}", latch), "BoolLatch { latched: false }");
    latch.set();
    assert_eq!(format!("{}", latch), "true");
    assert_eq!(format!("{:?}", latch), "BoolLatch { latched: true }");
}

#[test]
fn test_readers_see_set_once_it_happens() {
    const NUM_READERS: usize = 10;
    const NUM_LOADS: usize = 200_000;
    const PERMIT_THRESHOLD: usize = NUM_LOADS / 2;

    let latch = Arc::new(BoolLatch::new());
    let permit_set = Arc::new(StdAtomicBool::new(false));
    let total_reads = Arc::new(StdAtomicUsize::new(0));

    let setter = {
        let latch = latch.clone();
        let permit_set = permit_set.clone();
        thread::spawn(move || loop {
            if permit_set.load(Ordering::Acquire) {
                return latch.set();
            }
            thread::yield_now();
        })
    };

    let mut readers = vec![];
    for _ in 0..NUM_READERS {
        let latch = latch.clone();
        let permit_set = permit_set.clone();
        let total_reads = total_reads.clone();
        readers.push(thread::spawn(move || {
            let mut seen_true = false;
            for j in 0..NUM_LOADS {
                let value = latch.load();
                // Once observed latched, never observed unlatched again.
                assert!(!(seen_true && !value));
                seen_true |= value;
                total_reads.fetch_add(1, Ordering::Relaxed);
                if j == PERMIT_THRESHOLD {
                    permit_set.store(true, Ordering::Release);
                }
            }
        }));
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert!(setter.join().unwrap());

    assert_eq!(total_reads.load(Ordering::Relaxed), NUM_READERS * NUM_LOADS);
    assert!(latch.load());
}
