//! Default configuration values

/// Manifest file name
pub const MANIFEST_FILE: &str = "tetanus.toml";

/// Default wasm cross-compilation target
pub const DEFAULT_WASM_TARGET: &str = "wasm32-unknown-unknown";

/// Default build profile
pub const DEFAULT_PROFILE: &str = "release";

/// Default bindings output directory
pub const DEFAULT_OUT_DIR: &str = "web";

/// Default playfield width in cells
pub const DEFAULT_GRID_WIDTH: usize = 6;

/// Default playfield height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 12;

/// Seconds between automatic stack rises in play mode
pub const DEFAULT_RISE_INTERVAL_SECS: u64 = 8;

/// Default number of moves for a headless simulation
pub const DEFAULT_SIM_MOVES: u32 = 100;

/// Raise the stack every N moves during a headless simulation
pub const DEFAULT_SIM_RISE_EVERY: u32 = 10;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
