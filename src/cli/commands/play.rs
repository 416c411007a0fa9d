//! Play command implementation
//!
//! Launches the interactive terminal game.

use anyhow::Result;
use rand::RngCore;

use crate::cli::tui::GameTui;
use crate::core::session::Session;

/// Execute the play command
pub async fn execute(width: usize, height: usize, seed: Option<u64>) -> Result<()> {
    if width < 2 || height < 3 {
        anyhow::bail!(
            "Playfield must be at least 2x3 for an interactive game, got {width}x{height}"
        );
    }

    let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    let session = Session::new(width, height, seed);

    let mut tui = GameTui::new(session);
    tui.run()
}
