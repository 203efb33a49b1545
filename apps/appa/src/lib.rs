//! # AppA Library
//!
//! This library exposes the AppA command functions for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export appa_core for convenience
pub use appa_core;
