//! Infrastructure layer
//!
//! External tool discovery and invocation. Everything here shells out;
//! the decision logic lives in [`crate::core`].

pub mod bindgen;
pub mod process;
pub mod toolchain;
