//! Growth constants and runtime configuration defaults

use crate::algorithm::node::SplitStrategy;
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::ProbabilityTable;
use crate::spatial::direction::Move;
use std::str::FromStr;

// Branching is effectively disabled by default: all mass sits on a single move
/// Default split strategy weights
pub const DEFAULT_SPLIT_WEIGHTS: [(SplitStrategy, f64); 3] = [
    (SplitStrategy::NoSplit, 1.0),
    (SplitStrategy::SplitTwo, 0.0),
    (SplitStrategy::SplitThree, 0.0),
];

/// Default weights for the relative moves a continuing node may take
pub const DEFAULT_MOVE_WEIGHTS: [(Move, f64); 3] = [
    (Move::StepUp, 0.5),
    (Move::StepUpLeft, 0.25),
    (Move::StepUpRight, 0.25),
];

// Keeps termination at fractions of a percent for typical grids
/// Multiplier turning level progress into a termination chance
pub const DEFAULT_TERMINATION_SCALE: f64 = 0.01;

/// Nodes that must share a row before any of them may terminate
pub const DEFAULT_MIN_ROW_DENSITY: usize = 3;

/// Table names used in error messages
pub const SPLIT_TABLE_NAME: &str = "split strategy";
/// Table name for relative moves
pub const MOVE_TABLE_NAME: &str = "move";
/// Table name for the per-node termination draw
pub const TERMINATION_TABLE_NAME: &str = "termination";

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default edge length of one grid cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 40;
/// Colour of drawn circuit paths
pub const CIRCUIT_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Canvas background colour
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Growth normally exhausts long before this on any sensible grid
/// Default maximum number of levels before stopping
pub const DEFAULT_MAX_LEVELS: u32 = 500;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Default output file
pub const DEFAULT_OUTPUT: &str = "circuit.png";
/// Suffix added to animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames (one frame per level)
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the completed pattern stays on screen
pub const FINAL_FRAME_HOLD: u32 = 10;

/// Default split strategy table
pub fn default_split_table() -> ProbabilityTable<SplitStrategy> {
    ProbabilityTable::new(SPLIT_TABLE_NAME, DEFAULT_SPLIT_WEIGHTS.to_vec())
}

/// Default move table
pub fn default_move_table() -> ProbabilityTable<Move> {
    ProbabilityTable::new(MOVE_TABLE_NAME, DEFAULT_MOVE_WEIGHTS.to_vec())
}

/// Parse `label=weight` pairs separated by commas into a validated table
///
/// Whitespace around labels and weights is ignored. Each label may appear once.
///
/// # Errors
///
/// Returns an error if a pair is not of the form `label=weight`, a label is
/// unknown or repeated, a weight is not a number, or the table fails validation
pub fn parse_weight_table<L>(name: &'static str, text: &str) -> Result<ProbabilityTable<L>>
where
    L: Copy + PartialEq + FromStr<Err = crate::io::error::CircuitError>,
{
    let mut entries: Vec<(L, f64)> = Vec::new();

    for pair in text.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (label, weight) = pair
            .split_once('=')
            .ok_or_else(|| invalid_parameter(name, &pair, &"expected label=weight"))?;

        let label: L = label.trim().parse()?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|error: std::num::ParseFloatError| invalid_parameter(name, &pair, &error))?;

        if entries.iter().any(|(existing, _)| *existing == label) {
            return Err(invalid_parameter(name, &pair, &"label listed twice"));
        }
        entries.push((label, weight));
    }

    ProbabilityTable::validated(name, entries)
}

/// Parse a split strategy table such as `no-split=0.8,split-2=0.1,split-3=0.1`
///
/// # Errors
///
/// See [`parse_weight_table`]; unknown labels yield `InvalidSplitStrategy`
pub fn parse_split_weights(text: &str) -> Result<ProbabilityTable<SplitStrategy>> {
    parse_weight_table(SPLIT_TABLE_NAME, text)
}

/// Parse a move table such as `up=0.5,up-left=0.25,up-right=0.25`
///
/// # Errors
///
/// See [`parse_weight_table`]
pub fn parse_move_weights(text: &str) -> Result<ProbabilityTable<Move>> {
    parse_weight_table(MOVE_TABLE_NAME, text)
}
