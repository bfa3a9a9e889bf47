use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Booklet orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: the sheet stands upright, leaves are 210×140mm
    #[default]
    Portrait,
    /// Landscape: the sheet is turned, leaf width and height swap
    Landscape,
}

impl Orientation {
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Apply the orientation to portrait (width, height) dimensions
    pub fn apply(self, (w, h): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Standard sheet sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
    /// Portrait dimensions (width < height for standard sizes)
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

    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        orientation.apply(self.dimensions_mm())
    }
}

/// Size of one booklet leaf, given for portrait orientation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Default for LeafSize {
    fn default() -> Self {
        Self {
            width_mm: crate::constants::DEFAULT_LEAF_WIDTH_MM,
            height_mm: crate::constants::DEFAULT_LEAF_HEIGHT_MM,
        }
    }
}

impl LeafSize {
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        orientation.apply((self.width_mm, self.height_mm))
    }
}

/// Statistics about a booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Items in the content sequence (logical pages)
    pub content_items: usize,
    pub text_items: usize,
    pub image_items: usize,
    /// Physical sheets
    pub sheets: usize,
    /// Printed sides (two per sheet)
    pub sides: usize,
    /// Slots rendered with the empty placeholder
    pub empty_slots: usize,
    /// Leaf dimensions after orientation
    pub leaf_width_mm: f32,
    pub leaf_height_mm: f32,
}
