//! TUI (Terminal User Interface) module
//!
//! Provides the interactive terminal rendition of the game.

pub mod game;

pub use game::GameTui;
