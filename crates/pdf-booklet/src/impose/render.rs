//! Drawing one sheet side with builtin fonts

use super::label::slot_label;
use crate::layout::{BookletGeometry, SheetLayout};
use crate::options::BookletOptions;
use docx_extract::ContentItem;
use printpdf::*;

/// Build the page for one sheet side: one text line per slot at its anchor
pub(crate) fn render_side(
    layout: &SheetLayout,
    content: &[ContentItem],
    options: &BookletOptions,
    geometry: &BookletGeometry,
) -> PdfPage {
    let mut ops = Vec::new();

    for slot in &layout.slots {
        let (x, y) = geometry.anchor(slot.position);
        let text = slot_label(content, slot, options);

        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point { x: Pt(x), y: Pt(y) },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(options.font_size_pt),
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text)],
            font: BuiltinFont::Helvetica,
        });
        ops.push(Op::EndTextSection);
    }

    log::debug!(
        "Sheet {} {:?}: pages {} and {}",
        layout.sheet_index + 1,
        layout.side,
        layout.slots[0].page_number,
        layout.slots[1].page_number
    );

    PdfPage::new(
        Mm(geometry.sheet_width_mm),
        Mm(geometry.sheet_height_mm),
        ops,
    )
}
