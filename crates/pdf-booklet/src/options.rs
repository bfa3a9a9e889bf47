use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Geometry
    pub orientation: Orientation,
    pub paper_size: PaperSize,
    pub leaf_size: LeafSize,

    // Slot text
    pub anchor_margin_pt: f32,
    pub font_size_pt: f32,
    pub snippet_chars: usize,
    pub placeholder: String,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            paper_size: PaperSize::A4,
            leaf_size: LeafSize::default(),
            anchor_margin_pt: DEFAULT_ANCHOR_MARGIN_PT,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            snippet_chars: DEFAULT_SNIPPET_CHARS,
            placeholder: EMPTY_SLOT_TEXT.to_string(),
        }
    }
}

impl BookletOptions {
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (sheet_w, sheet_h) = self.paper_size.dimensions_mm();
        if !is_positive(sheet_w) || !is_positive(sheet_h) {
            return Err(BookletError::Config(format!(
                "Paper size must be positive, got {}x{}mm",
                sheet_w, sheet_h
            )));
        }

        if !is_positive(self.leaf_size.width_mm) || !is_positive(self.leaf_size.height_mm) {
            return Err(BookletError::Config(format!(
                "Leaf size must be positive, got {}x{}mm",
                self.leaf_size.width_mm, self.leaf_size.height_mm
            )));
        }

        if !is_positive(self.font_size_pt) {
            return Err(BookletError::Config(format!(
                "Font size must be positive, got {}",
                self.font_size_pt
            )));
        }

        if self.snippet_chars == 0 {
            return Err(BookletError::Config(
                "Snippet length must be at least one character".to_string(),
            ));
        }

        // Both anchors must land on the sheet: the right one starts at the fold
        let (sheet_w, sheet_h) = self.paper_size.dimensions_with_orientation(self.orientation);
        let half_width_pt = mm_to_pt(sheet_w) / 2.0;
        if self.anchor_margin_pt.is_nan()
            || self.anchor_margin_pt < 0.0
            || self.anchor_margin_pt >= half_width_pt
            || self.anchor_margin_pt >= mm_to_pt(sheet_h)
        {
            return Err(BookletError::Config(format!(
                "Anchor margin {}pt does not fit a {}x{}mm sheet",
                self.anchor_margin_pt, sheet_w, sheet_h
            )));
        }

        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
