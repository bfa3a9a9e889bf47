//! Layout data types for imposition

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Horizontal half of a sheet side, split at the fold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    Left,
    Right,
}

/// One logical page's place on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookletSlot {
    /// Physical sheet this slot is printed on (0-based)
    pub sheet_index: usize,
    pub side: SheetSide,
    pub position: SlotPosition,
    /// Index into the content sequence; may be past its end
    pub content_index: usize,
    /// 1-based page number shown to the reader
    pub page_number: usize,
}

impl BookletSlot {
    /// Whether a content item exists for this slot
    pub fn is_filled(&self, content_len: usize) -> bool {
        self.content_index < content_len
    }
}

/// The two slots printed on one side of a sheet, left then right
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_index: usize,
    pub side: SheetSide,
    pub slots: [BookletSlot; 2],
}

impl SheetLayout {
    pub fn slot(&self, position: SlotPosition) -> &BookletSlot {
        match position {
            SlotPosition::Left => &self.slots[0],
            SlotPosition::Right => &self.slots[1],
        }
    }
}
