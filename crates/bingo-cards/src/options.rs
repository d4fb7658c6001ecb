use crate::types::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Everything needed to lay out a run of bingo cards
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BingoOptions {
    // Grid
    pub rows: usize,
    pub cols: usize,

    // Card count and density
    pub num_cards: usize,
    pub cards_per_page: usize,

    /// Phrase spread across the last row, one word per cell
    pub header: Option<String>,

    /// Number of identical output files
    pub copies: usize,

    pub paper_size: PaperSize,

    /// Fixed RNG seed; a fresh entropy seed is used when unset
    pub seed: Option<u64>,

    /// TrueType font to embed instead of the bundled DejaVu Sans
    pub font_path: Option<PathBuf>,
}

impl Default for BingoOptions {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            num_cards: 1,
            cards_per_page: 3,
            header: Some("B I N G O".to_string()),
            copies: 1,
            paper_size: PaperSize::A4,
            seed: None,
            font_path: None,
        }
    }
}

/// Truncate a user-supplied grid dimension toward zero, never below one
pub fn grid_dimension(value: f64) -> usize {
    if value.is_finite() && value >= 1.0 {
        value.trunc() as usize
    } else {
        1
    }
}

impl BingoOptions {
    /// Raise zero rows or columns to one
    pub fn clamp_grid(&mut self) {
        self.rows = self.rows.max(1);
        self.cols = self.cols.max(1);
    }

    /// Header words, or `None` when no non-blank header is configured
    pub fn header_words(&self) -> Option<Vec<&str>> {
        let words: Vec<&str> = self.header.as_deref()?.split_whitespace().collect();
        if words.is_empty() { None } else { Some(words) }
    }

    /// Random source for a run: seeded when `seed` is set
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let mut options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BingoError::Config(format!("Failed to parse config: {}", e)))?;
        options.clamp_grid();
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BingoError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options. Grid dimensions are clamped, never rejected.
    pub fn validate(&self) -> Result<()> {
        if self.num_cards == 0 {
            return Err(BingoError::Config(
                "At least one card must be requested".to_string(),
            ));
        }
        if self.cards_per_page == 0 {
            return Err(BingoError::Config(
                "Cards per page must be at least 1".to_string(),
            ));
        }
        if self.copies == 0 {
            return Err(BingoError::Config("Copies must be at least 1".to_string()));
        }

        let (width, height) = self.paper_size.dimensions_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(BingoError::Config(format!(
                "Paper size {}×{}mm is not usable",
                width, height
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimension_truncates() {
        assert_eq!(grid_dimension(5.9), 5);
        assert_eq!(grid_dimension(1.0), 1);
        assert_eq!(grid_dimension(0.4), 1);
        assert_eq!(grid_dimension(-3.0), 1);
        assert_eq!(grid_dimension(f64::NAN), 1);
    }

    #[test]
    fn test_clamp_grid() {
        let mut options = BingoOptions {
            rows: 0,
            cols: 7,
            ..Default::default()
        };
        options.clamp_grid();
        assert_eq!((options.rows, options.cols), (1, 7));
    }

    #[test]
    fn test_blank_header_is_none() {
        let options = BingoOptions {
            header: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(options.header_words().is_none());

        let options = BingoOptions::default();
        assert_eq!(options.header_words(), Some(vec!["B", "I", "N", "G", "O"]));
    }
}
