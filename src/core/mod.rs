//! Core logic
//!
//! The puzzle engine ([`grid`], [`cursor`], [`session`]) is pure and
//! compiles for every target, including wasm32. The build tooling
//! ([`manifest`], [`pipeline`], [`clean`], [`doctor`]) is host-only.

pub mod cursor;
pub mod grid;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod clean;
#[cfg(not(target_arch = "wasm32"))]
pub mod doctor;
#[cfg(not(target_arch = "wasm32"))]
pub mod manifest;
#[cfg(not(target_arch = "wasm32"))]
pub mod pipeline;
