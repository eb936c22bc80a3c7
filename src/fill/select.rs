//! Per-cell candidate selection

use smol_str::SmolStr;

use super::{FillMode, SeededRandom};
use crate::error::{BannerError, Result};

/// Non-empty, ordered set of foreground emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Vec<SmolStr>);

impl Candidates {
    pub fn new(items: Vec<SmolStr>) -> Result<Self> {
        if items.is_empty() {
            return Err(BannerError::NoCandidates);
        }
        Ok(Self(items))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> &SmolStr {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.0.iter()
    }

    fn at(&self, index: usize) -> &SmolStr {
        &self.0[index.min(self.0.len() - 1)]
    }
}

/// Position of a cell inside the bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
    pub total_rows: usize,
    pub total_cols: usize,
}

/// Linear interpolation of `pos` over `0..total` onto `0..len`
fn gradient_index(pos: usize, total: usize, len: usize) -> usize {
    if total <= 1 || len <= 1 {
        return 0;
    }
    let ratio = pos as f64 / (total - 1) as f64;
    ((ratio * (len - 1) as f64).floor() as usize).min(len - 1)
}

/// Choose the emoji for one foreground cell
///
/// A single candidate is returned without touching the generator.
/// `Random` advances `rng` once per call.
pub fn select_emoji<'a>(
    candidates: &'a Candidates,
    pos: CellPos,
    mode: FillMode,
    rng: &mut SeededRandom,
) -> &'a SmolStr {
    let len = candidates.len();
    if len == 1 {
        return candidates.first();
    }

    let index = match mode {
        FillMode::Random => rng.next_index(len),
        FillMode::Row => pos.row % len,
        FillMode::Column => pos.col % len,
        FillMode::RowGradient => gradient_index(pos.row, pos.total_rows, len),
        // (total_cols - 1) like rows, so the last column gets the last candidate
        FillMode::ColumnGradient => gradient_index(pos.col, pos.total_cols, len),
        FillMode::First => 0,
    };
    candidates.at(index)
}
