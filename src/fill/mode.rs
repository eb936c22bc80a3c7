//! Fill modes

use serde::{Deserialize, Serialize};

/// Strategy choosing which candidate fills a foreground cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Seeded random draw per cell
    #[default]
    Random,
    /// Cycle candidates by row
    Row,
    /// Cycle candidates by column
    Column,
    /// Interpolate top to bottom
    RowGradient,
    /// Interpolate left to right
    ColumnGradient,
    /// Always the first candidate (also what unknown names map to)
    #[serde(other)]
    First,
}

impl FillMode {
    pub const ALL: [FillMode; 6] = [
        FillMode::Random,
        FillMode::Row,
        FillMode::Column,
        FillMode::RowGradient,
        FillMode::ColumnGradient,
        FillMode::First,
    ];

    /// Strict parse; `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|mode| mode.name() == normalized)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FillMode::Random => "random",
            FillMode::Row => "row",
            FillMode::Column => "column",
            FillMode::RowGradient => "row-gradient",
            FillMode::ColumnGradient => "column-gradient",
            FillMode::First => "first",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(FillMode::parse("random"), Some(FillMode::Random));
        assert_eq!(FillMode::parse("Row-Gradient"), Some(FillMode::RowGradient));
        assert_eq!(FillMode::parse("column_gradient"), Some(FillMode::ColumnGradient));
        assert_eq!(FillMode::parse("diagonal"), None);
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for mode in FillMode::ALL {
            assert_eq!(FillMode::parse(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_serde_unknown_is_first() {
        #[derive(Deserialize)]
        struct Wrap {
            mode: FillMode,
        }
        let w: Wrap = toml::from_str("mode = \"row-gradient\"").unwrap();
        assert_eq!(w.mode, FillMode::RowGradient);
        let w: Wrap = toml::from_str("mode = \"sparkle\"").unwrap();
        assert_eq!(w.mode, FillMode::First);
    }
}
