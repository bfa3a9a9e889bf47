use crate::layout::BookletSlot;
use crate::options::BookletOptions;
use docx_extract::ContentItem;

/// Text printed for a slot: `Page N: <snippet>...`, or the placeholder
/// when the slot lies past the end of the content.
///
/// Image items are labelled by file name; their pixels are not drawn.
pub fn slot_label(content: &[ContentItem], slot: &BookletSlot, options: &BookletOptions) -> String {
    match content.get(slot.content_index) {
        Some(item) => format!(
            "Page {}: {}...",
            slot.page_number,
            item.snippet(options.snippet_chars)
        ),
        None => options.placeholder.clone(),
    }
}
