//! Tests for the domain model

mod serde_tests;
