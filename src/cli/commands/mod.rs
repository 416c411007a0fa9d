//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod clean;
pub mod doctor;
pub mod play;
pub mod simulate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the crate to wasm and generate web bindings
    Build {
        /// Build with the dev profile instead of release
        #[arg(long)]
        debug: bool,

        /// Override the bindings output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Skip the target installation step
        #[arg(long)]
        skip_install: bool,

        /// Number of parallel compile jobs
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Remove build artifacts
    Clean,

    /// Validate configuration without building
    Check,

    /// Check system dependencies
    Doctor,

    /// Play the game in the terminal
    Play {
        /// Playfield width in cells
        #[arg(long, default_value_t = defaults::DEFAULT_GRID_WIDTH)]
        width: usize,

        /// Playfield height in cells
        #[arg(long, default_value_t = defaults::DEFAULT_GRID_HEIGHT)]
        height: usize,

        /// RNG seed (random if not given)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a headless scripted session and report statistics
    Simulate {
        /// Number of random swaps to perform
        #[arg(short, long, default_value_t = defaults::DEFAULT_SIM_MOVES)]
        moves: u32,

        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Raise the stack every N moves (0 disables)
        #[arg(long, default_value_t = defaults::DEFAULT_SIM_RISE_EVERY)]
        rise_every: u32,

        /// Playfield width in cells
        #[arg(long, default_value_t = defaults::DEFAULT_GRID_WIDTH)]
        width: usize,

        /// Playfield height in cells
        #[arg(long, default_value_t = defaults::DEFAULT_GRID_HEIGHT)]
        height: usize,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build {
                debug,
                out_dir,
                skip_install,
                jobs,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = build::BuildOptions {
                    debug,
                    out_dir,
                    skip_install,
                    jobs,
                };
                build::execute(&current_dir, options).await
            }
            Self::Clean => {
                let current_dir = std::env::current_dir()?;
                clean::execute(&current_dir).await
            }
            Self::Check => {
                let current_dir = std::env::current_dir()?;
                check::execute(&current_dir).await
            }
            Self::Doctor => {
                let current_dir = std::env::current_dir().ok();
                doctor::execute(current_dir.as_deref()).await
            }
            Self::Play {
                width,
                height,
                seed,
            } => play::execute(width, height, seed).await,
            Self::Simulate {
                moves,
                seed,
                rise_every,
                width,
                height,
            } => {
                let options = simulate::SimulateOptions {
                    moves,
                    seed,
                    rise_every,
                    width,
                    height,
                };
                simulate::execute(&options).await
            }
        }
    }
}
