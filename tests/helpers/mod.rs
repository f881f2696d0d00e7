//! Test helpers module
//!
//! Fake HR backend, demo dataset and target selection shared by the
//! integration tests.

#![allow(dead_code)]

pub mod simple_test;
pub mod target;
pub mod test_data;

pub use hr_mock::*;
pub use simple_test::*;
pub use target::*;
pub use test_data::*;
