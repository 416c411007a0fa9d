//! Simulate command implementation
//!
//! Runs a headless session: seeded random swaps with periodic stack
//! rises, then reports aggregate statistics. Output is deterministic
//! for a given seed and option set.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::output::{is_json, print_detail, print_success};
use crate::core::session::Session;

/// Simulation options
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    /// Number of random swaps to perform
    pub moves: u32,
    /// RNG seed
    pub seed: u64,
    /// Raise the stack every N moves (0 disables)
    pub rise_every: u32,
    /// Playfield width
    pub width: usize,
    /// Playfield height
    pub height: usize,
}

/// Execute the simulate command
pub async fn execute(options: &SimulateOptions) -> Result<()> {
    if options.width < 2 || options.height == 0 {
        anyhow::bail!(
            "Playfield must be at least 2 cells wide and 1 cell tall, got {}x{}",
            options.width,
            options.height
        );
    }

    let mut session = Session::new(options.width, options.height, options.seed);
    // Driver RNG is separate from the session's deal RNG so move
    // selection and dealing stay independently reproducible
    let mut driver = StdRng::seed_from_u64(options.seed.wrapping_add(1));

    for n in 1..=options.moves {
        if session.is_game_over() {
            break;
        }
        let x = driver.gen_range(0..options.width.saturating_sub(1).max(1));
        let y = driver.gen_range(0..options.height);
        session.set_cursor(x, y);
        session.swap();

        if options.rise_every > 0 && n % options.rise_every == 0 {
            session.raise();
        }
    }

    let summary = session.summary();

    if is_json() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_success(&format!(
        "Simulation finished after {} moves (seed {})",
        summary.moves, summary.seed
    ));
    print_detail(&format!("Score:      {}", summary.score));
    print_detail(&format!("Cleared:    {}", summary.cleared_total));
    print_detail(&format!("Max chain:  {}", summary.max_chain));
    print_detail(&format!("Rises:      {}", summary.rises));
    print_detail(&format!(
        "Game over:  {}",
        if summary.game_over { "yes" } else { "no" }
    ));
    Ok(())
}
