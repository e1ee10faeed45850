//! Benchmark Asset Fetcher Library
//!
//! This library provides the core functionality for the `benchfetch` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
