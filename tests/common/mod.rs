//! Common test utilities for Paddock property, scenario and CLI tests.
//!
//! This module provides:
//! - `World`: engines over an in-memory store with deterministic tokens
//! - `TestEnv`: isolated temp directory plus helpers to run the `paddock` binary

#![allow(dead_code)]

pub mod env;
pub mod world;

pub use env::*;
pub use world::*;
