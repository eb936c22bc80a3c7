//! Stack line bitmaps into one banner bitmap

use super::Bitmap;

/// Merge line bitmaps top to bottom
///
/// Every line is padded on the right to the widest line and `line_spacing`
/// blank rows go between consecutive lines. Leading and trailing blank rows
/// are trimmed afterwards; columns are never removed.
pub fn compose(lines: &[Bitmap], line_spacing: usize) -> Bitmap {
    let width = lines.iter().map(Bitmap::width).max().unwrap_or(0);
    let mut rows: Vec<Vec<bool>> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            rows.extend(std::iter::repeat(vec![false; width]).take(line_spacing));
        }
        for row in line.rows() {
            let mut padded = row.clone();
            padded.resize(width, false);
            rows.push(padded);
        }
    }

    Bitmap::from_uniform(rows, width).trimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bm(rows: &[&str]) -> Bitmap {
        Bitmap::from_rows(
            rows.iter()
                .map(|r| r.chars().map(|c| c == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_pads_to_widest_line() {
        let merged = compose(&[bm(&["#"]), bm(&["###"])], 0);
        assert_eq!(merged, bm(&["#..", "###"]));
    }

    #[test]
    fn test_line_spacing_between_lines_only() {
        let merged = compose(&[bm(&["#"]), bm(&["#"]), bm(&["#"])], 2);
        assert_eq!(merged.height(), 7);
        assert!(!merged.get(1, 0));
        assert!(merged.get(3, 0));
    }

    #[test]
    fn test_trims_blank_edges() {
        let merged = compose(&[bm(&["..", ".."]), bm(&["#.", ".."])], 1);
        assert_eq!(merged, bm(&["#."]));
    }

    #[test]
    fn test_blank_lines_keep_position() {
        let merged = compose(&[bm(&["#"]), bm(&["."]), bm(&["#"])], 0);
        assert_eq!(merged, bm(&["#", ".", "#"]));
    }

    #[test]
    fn test_all_background_collapses() {
        assert!(compose(&[bm(&["..."])], 1).is_empty());
        assert!(compose(&[], 1).is_empty());
    }
}
