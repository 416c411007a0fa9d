//! Tetanus Attack - block puzzle engine with a wasm build pipeline
//!
//! This library provides the puzzle engine (grid, cursor, session) and the
//! tooling used to ship it to the web as a WebAssembly binary.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`] - Puzzle engine and build pipeline logic (no I/O in the engine)
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`infra`] - Infrastructure layer (external tool invocation)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling
//!
//! When compiled for `wasm32`, the tooling layers are dropped and the engine
//! is exposed through `wasm-bindgen` bindings instead.

pub mod core;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod infra;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(test)]
pub mod test_utils;
