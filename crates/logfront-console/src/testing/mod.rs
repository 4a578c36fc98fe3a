//! Testing utilities for logfront status output
//!
//! Provides `TestStatus` for capturing and asserting on status lines in tests.

mod test_status;

pub use test_status::TestStatus;
