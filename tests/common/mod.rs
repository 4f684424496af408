//! Common test utilities for GymLog CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp data/config directories
//! - Assertion macros: `assert_output_contains!`, `assert_success!`
//! - Fixtures: Reusable workout documents

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
