//! Folio slot ordering
//!
//! Every four logical pages fold into one sheet:
//! - Front: [4, 1] (left=4, right=1)
//! - Back:  [2, 3] (left=2, right=3)
//!
//! The last page of the group pairs with the first, which is the
//! saddle-stitch order for a single folded sheet.

use super::{BookletSlot, SheetLayout, SheetSide, SlotPosition};
use crate::constants::{PAGES_PER_SHEET, SLOTS_PER_SIDE};

/// 0-based page offsets within a sheet, in slot order
/// (front-left, front-right, back-left, back-right)
const FOLIO_PAGE_ORDER: [usize; PAGES_PER_SHEET] = [3, 0, 1, 2];

/// Lay out `total_pages` logical pages, two sides per sheet.
///
/// Returns `2 * ceil(total_pages / 4)` sides, front before back.
/// Slots past the end of the content are kept; callers check
/// [`BookletSlot::is_filled`].
pub fn plan_booklet(total_pages: usize) -> Vec<SheetLayout> {
    let sheets = total_pages.div_ceil(PAGES_PER_SHEET);

    (0..sheets)
        .flat_map(|sheet_index| {
            [SheetSide::Front, SheetSide::Back]
                .into_iter()
                .map(move |side| side_layout(sheet_index, side))
        })
        .collect()
}

fn side_layout(sheet_index: usize, side: SheetSide) -> SheetLayout {
    let sheet_start = sheet_index * PAGES_PER_SHEET;
    let order_start = match side {
        SheetSide::Front => 0,
        SheetSide::Back => SLOTS_PER_SIDE,
    };

    let slot = |position: SlotPosition, column: usize| {
        let content_index = sheet_start + FOLIO_PAGE_ORDER[order_start + column];
        BookletSlot {
            sheet_index,
            side,
            position,
            content_index,
            page_number: content_index + 1,
        }
    };

    SheetLayout {
        sheet_index,
        side,
        slots: [slot(SlotPosition::Left, 0), slot(SlotPosition::Right, 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sheet_pairs_last_page_with_first() {
        let plan = plan_booklet(4);
        assert_eq!(plan.len(), 2);

        let front = &plan[0];
        assert_eq!(front.side, SheetSide::Front);
        assert_eq!(front.slot(SlotPosition::Left).page_number, 4);
        assert_eq!(front.slot(SlotPosition::Right).page_number, 1);

        let back = &plan[1];
        assert_eq!(back.side, SheetSide::Back);
        assert_eq!(back.slot(SlotPosition::Left).page_number, 2);
        assert_eq!(back.slot(SlotPosition::Right).page_number, 3);
    }

    #[test]
    fn second_sheet_is_offset_by_four() {
        let plan = plan_booklet(8);
        let indices: Vec<usize> = plan[2..]
            .iter()
            .flat_map(|side| side.slots.iter().map(|s| s.content_index))
            .collect();
        assert_eq!(indices, vec![7, 4, 5, 6]);
        assert!(plan[2..].iter().all(|side| side.sheet_index == 1));
    }

    #[test]
    fn empty_content_has_no_sides() {
        assert!(plan_booklet(0).is_empty());
    }
}
