//! Fill strategy engine
//!
//! Decides which emoji occupies each foreground cell. All randomness comes
//! from a [`SeededRandom`] passed in by the caller.

pub mod intensity;
pub mod mode;
pub mod rng;
pub mod select;

pub use intensity::theme_intensity;
pub use mode::FillMode;
pub use rng::SeededRandom;
pub use select::{select_emoji, Candidates, CellPos};
