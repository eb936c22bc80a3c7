//! Clustered intensity levels for themed fills
//!
//! Mixes a smooth wave over (row, col) with seeded noise so neighbouring
//! cells tend to share a level, like a contribution heat map.

use super::SeededRandom;
use crate::constants::THEME_LEVELS;

const ROW_FREQUENCY: f64 = 0.7;
const COL_FREQUENCY: f64 = 0.45;
const WAVE_WEIGHT: f64 = 0.65;

/// Foreground level for a cell, in `1..THEME_LEVELS`
///
/// Level 0 is reserved for the background. Advances `rng` once.
pub fn theme_intensity(row: usize, col: usize, rng: &mut SeededRandom) -> usize {
    let noise = rng.next_f64();
    let wave = ((row as f64 * ROW_FREQUENCY).sin() + (col as f64 * COL_FREQUENCY).cos()) / 4.0 + 0.5;
    let value = WAVE_WEIGHT * wave + (1.0 - WAVE_WEIGHT) * noise;

    let foreground_levels = THEME_LEVELS - 1;
    let step = ((value * foreground_levels as f64).floor() as usize).min(foreground_levels - 1);
    1 + step
}
