/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

mod bool_latch_tests;
mod counter_tests;
mod down_latch_tests;
