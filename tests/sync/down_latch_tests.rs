/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_latch::{
    Direction,
    DownLatch,
    LatchError,
    LatchState,
    LatchStep,
    MAX_LATCH_DISTANCE,
};

fn assert_load(latch: &DownLatch, is_latched: bool, count: i64) {
    // Loads never change state, so two in a row must agree.
    for _ in 0..2 {
        assert_eq!(latch.load(), LatchState { is_latched, count });
    }
}

fn step(latch: &DownLatch) -> (bool, bool, i64) {
    latch.step().into()
}

#[test]
fn test_new() {
    let latch = DownLatch::new(1, 0).unwrap();
    assert_eq!(latch.threshold(), 0);
    assert_load(&latch, false, 1);
}

#[test]
fn test_new_rejects_initial_not_above_threshold() {
    assert_eq!(
        DownLatch::new(5, 10).unwrap_err(),
        LatchError::InvalidDirection {
            direction: Direction::Down,
            initial_value: 5,
            threshold: 10,
        }
    );
    assert!(matches!(
        DownLatch::new(3, 3),
        Err(LatchError::InvalidDirection { .. })
    ));
}

#[test]
fn test_new_rejects_excessive_distance() {
    assert_eq!(
        DownLatch::new(i64::MAX, -1).unwrap_err(),
        LatchError::DistanceExceedsMaximum {
            initial_value: i64::MAX,
            threshold: -1,
        }
    );
    assert!(matches!(
        DownLatch::new(i64::MAX, i64::MIN),
        Err(LatchError::DistanceExceedsMaximum { .. })
    ));
}

#[test]
fn test_new_accepts_maximum_distance() {
    let latch = DownLatch::new(MAX_LATCH_DISTANCE, 0).unwrap();
    assert_load(&latch, false, MAX_LATCH_DISTANCE);
    assert_eq!(latch.step().count, MAX_LATCH_DISTANCE - 1);

    let latch = DownLatch::new(-1, i64::MIN).unwrap();
    assert_load(&latch, false, -1);
}

#[test]
fn test_range_10_to_8() {
    let latch = DownLatch::new(10, 8).unwrap();

    assert_load(&latch, false, 10);

    assert_eq!(
        latch.step(),
        LatchStep {
            flipped: false,
            is_latched: false,
            count: 9
        }
    );
    assert_load(&latch, false, 9);

    assert_eq!(
        latch.step(),
        LatchStep {
            flipped: true,
            is_latched: true,
            count: 8
        }
    );
    assert_load(&latch, true, 8);

    assert_eq!(
        latch.step(),
        LatchStep {
            flipped: false,
            is_latched: true,
            count: 8
        }
    );
    assert_load(&latch, true, 8);
}

#[test]
fn test_range_2_to_minus_1() {
    let latch = DownLatch::new(2, -1).unwrap();

    assert_load(&latch, false, 2);

    assert_eq!(step(&latch), (false, false, 1));
    assert_load(&latch, false, 1);

    assert_eq!(step(&latch), (false, false, 0));
    assert_load(&latch, false, 0);

    assert_eq!(step(&latch), (true, true, -1));
    assert_load(&latch, true, -1);

    assert_eq!(step(&latch), (false, true, -1));
    assert_load(&latch, true, -1);
}

#[test]
fn test_stays_latched_after_many_steps() {
    let latch = DownLatch::new(20, 0).unwrap();

    for expected in (1..20).rev() {
        let step = latch.step();
        assert!(!step.flipped);
        assert!(!step.is_latched);
        assert_eq!(step.count, expected);
    }

    assert!(latch.step().flipped);

    for _ in 0..1_000 {
        let step = latch.step();
        assert!(!step.flipped);
        assert!(step.is_latched);
        assert_eq!(step.count, 0);
        assert_load(&latch, true, 0);
    }
}

#[test]
fn test_debug_display() {
    let latch = DownLatch::new(3, 1).unwrap();
    assert_eq!(format!("{}", latch), "3");
    assert_eq!(
        format!("{:?}", latch),
        "DownLatch { count: 3, threshold: 1, latched: false }"
    );
}
