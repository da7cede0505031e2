//! Tests for the projection engine

mod lcc_tests;
