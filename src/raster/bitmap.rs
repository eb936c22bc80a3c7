//! Rectangular foreground/background grid

use crate::error::{BannerError, Result};

/// Boolean pixel grid, `true` = foreground
///
/// Every row has the same length. A grid with no rows is the empty
/// banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Bitmap {
    /// The empty banner (no rows, no columns)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rows, rejecting jagged input
    #[allow(dead_code)]
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(BannerError::JaggedBitmap {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows, width })
    }

    /// Build from rows the caller already made uniform
    pub(super) fn from_uniform(rows: Vec<Vec<bool>>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True for the empty banner
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Foreground test; out-of-range cells are background
    #[allow(dead_code)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of foreground cells
    pub fn foreground_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| **cell).count()
    }

    /// Drop leading and trailing all-background rows
    ///
    /// Columns are never touched. A bitmap with no foreground collapses to
    /// [`Bitmap::empty`].
    pub fn trimmed(&self) -> Bitmap {
        let has_ink = |row: &Vec<bool>| row.iter().any(|cell| *cell);
        let first = self.rows.iter().position(has_ink);
        let last = self.rows.iter().rposition(has_ink);
        match (first, last) {
            (Some(first), Some(last)) => {
                Self::from_uniform(self.rows[first..=last].to_vec(), self.width)
            }
            _ => Self::empty(),
        }
    }
}
