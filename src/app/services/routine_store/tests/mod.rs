//! Tests for the routine store
