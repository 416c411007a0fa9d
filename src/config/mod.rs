//! Configuration module
//!
//! Constants and default values used across the crate.

pub mod defaults;
