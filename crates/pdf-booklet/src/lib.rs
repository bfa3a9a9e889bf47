mod constants;
pub mod impose;
pub mod layout;
mod options;
mod stats;
mod types;

pub use constants::*;
pub use impose::{generate_booklet, generate_booklet_bytes, slot_label};
pub use layout::{BookletGeometry, BookletSlot, SheetLayout, SheetSide, SlotPosition, plan_booklet};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;

pub use docx_extract::{ContentItem, TextStyle};
