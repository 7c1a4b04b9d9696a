/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_latch::{
    DownCounter,
    UpCounter,
};

#[test]
fn test_down_counter_new() {
    let counter = DownCounter::new(1);
    assert_eq!(counter.load(), 1);
}

#[test]
fn test_down_counter_passes_zero() {
    let counter = DownCounter::new(2);

    assert_eq!(counter.load(), 2);
    assert_eq!(counter.load(), 2);

    for expected in [1, 0, -1] {
        assert_eq!(counter.step(), expected);
        assert_eq!(counter.load(), expected);
        assert_eq!(counter.load(), expected);
    }
}

#[test]
fn test_down_counter_wraps() {
    let counter = DownCounter::new(i64::MIN);
    assert_eq!(counter.step(), i64::MAX);
}

#[test]
fn test_down_counter_default_and_from() {
    assert_eq!(DownCounter::default().load(), 0);
    assert_eq!(DownCounter::from(-4).load(), -4);
}

#[test]
fn test_up_counter_new() {
    let counter = UpCounter::new(1);
    assert_eq!(counter.load(), 1);
}

#[test]
fn test_up_counter_does_not_stop() {
    let counter = UpCounter::new(-10);

    assert_eq!(counter.load(), -10);

    for i in 0..17 {
        let expected = -10 + (1 + i);
        assert_eq!(counter.step(), expected);
        assert_eq!(counter.load(), expected);
        assert_eq!(counter.load(), expected);
    }

    assert_eq!(counter.step(), 8);
    assert_eq!(counter.step(), 9);
    assert_eq!(counter.load(), 9);
}

#[test]
fn test_up_counter_wraps() {
    let counter = UpCounter::new(i64::MAX);
    assert_eq!(counter.step(), i64::MIN);
}

#[test]
fn test_debug_display() {
    let down = DownCounter::new(5);
    let up = UpCounter::default();
    assert_eq!(format!("{}", down), "5");
    assert_eq!(format!("{:?}", down), "DownCounter { count: 5 }");
    assert_eq!(format!("{}", up), "0");
    assert_eq!(format!("{:?}", up), "UpCounter { count: 0 }");
}
