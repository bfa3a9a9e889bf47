//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Signature Geometry
// =============================================================================

/// Logical pages carried by one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Logical pages printed on each side of a sheet
pub const SLOTS_PER_SIDE: usize = 2;

/// Booklet leaf width in portrait orientation (a quarter of the sheet)
pub const DEFAULT_LEAF_WIDTH_MM: f32 = 210.0;

/// Booklet leaf height in portrait orientation
pub const DEFAULT_LEAF_HEIGHT_MM: f32 = 140.0;

// =============================================================================
// Slot Text
// =============================================================================

/// Distance of each text anchor from the sheet's left/top edge and the fold (points)
pub const DEFAULT_ANCHOR_MARGIN_PT: f32 = 50.0;

/// Font size of slot text (points)
pub const DEFAULT_FONT_SIZE_PT: f32 = 12.0;

/// Characters of paragraph text shown per slot
pub const DEFAULT_SNIPPET_CHARS: usize = 20;

/// Text drawn for a slot past the end of the content
pub const EMPTY_SLOT_TEXT: &str = "Empty";
