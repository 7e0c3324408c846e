//! Test utilities
//!
//! Fixtures and hand-written port implementations for unit and router tests.
//! The in-memory adapter covers the repositories, so the mocks here only
//! cover what it cannot: recording notifications and forcing failures.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
