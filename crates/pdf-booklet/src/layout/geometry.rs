//! Sheet and leaf dimensions, and where slot text is anchored

use super::SlotPosition;
use crate::constants::mm_to_pt;
use crate::options::BookletOptions;

/// Resolved dimensions for one booklet run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookletGeometry {
    /// Leaf size with orientation applied
    pub leaf_width_mm: f32,
    pub leaf_height_mm: f32,
    /// Physical sheet size with orientation applied
    pub sheet_width_mm: f32,
    pub sheet_height_mm: f32,
    pub anchor_margin_pt: f32,
}

impl BookletGeometry {
    pub fn new(options: &BookletOptions) -> Self {
        let (leaf_width_mm, leaf_height_mm) =
            options.leaf_size.dimensions_with_orientation(options.orientation);
        let (sheet_width_mm, sheet_height_mm) =
            options.paper_size.dimensions_with_orientation(options.orientation);

        Self {
            leaf_width_mm,
            leaf_height_mm,
            sheet_width_mm,
            sheet_height_mm,
            anchor_margin_pt: options.anchor_margin_pt,
        }
    }

    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        (mm_to_pt(self.sheet_width_mm), mm_to_pt(self.sheet_height_mm))
    }

    /// Text cursor for a slot, in points from the sheet's bottom-left corner
    pub fn anchor(&self, position: SlotPosition) -> (f32, f32) {
        match position {
            SlotPosition::Left => self.left_anchor(),
            SlotPosition::Right => self.right_anchor(),
        }
    }

    pub fn left_anchor(&self) -> (f32, f32) {
        let (_, sheet_h) = self.sheet_dimensions_pt();
        (self.anchor_margin_pt, sheet_h - self.anchor_margin_pt)
    }

    /// Same height as the left anchor, offset from the fold
    pub fn right_anchor(&self) -> (f32, f32) {
        let (sheet_w, sheet_h) = self.sheet_dimensions_pt();
        (
            sheet_w / 2.0 + self.anchor_margin_pt,
            sheet_h - self.anchor_margin_pt,
        )
    }
}
