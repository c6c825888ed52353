//! Tests for the stat tracker

mod tracker_tests;
