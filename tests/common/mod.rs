//! Common test utilities for canonsort integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated corpus and working directory with a CLI runner
//! - Fixtures: TEI document builders and canon registries

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
