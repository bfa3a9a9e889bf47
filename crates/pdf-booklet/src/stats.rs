use crate::layout::{BookletGeometry, plan_booklet};
use crate::options::BookletOptions;
use crate::types::*;
use docx_extract::{ContentItem, summarize};

/// Calculate statistics for the booklet without rendering it
pub fn calculate_statistics(
    content: &[ContentItem],
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let summary = summarize(content);
    let geometry = BookletGeometry::new(options);
    let plan = plan_booklet(summary.total());

    let empty_slots = plan
        .iter()
        .flat_map(|side| side.slots.iter())
        .filter(|slot| !slot.is_filled(summary.total()))
        .count();

    Ok(BookletStatistics {
        content_items: summary.total(),
        text_items: summary.text_items,
        image_items: summary.image_items,
        sheets: plan.len() / 2,
        sides: plan.len(),
        empty_slots,
        leaf_width_mm: geometry.leaf_width_mm,
        leaf_height_mm: geometry.leaf_height_mm,
    })
}
