//! Booklet imposition
//!
//! 1. Plan sheet sides for the content sequence (folio order)
//! 2. Label each slot from its content item
//! 3. Render each side as one PDF page

mod label;
mod render;

pub use label::slot_label;

use crate::layout::{BookletGeometry, plan_booklet};
use crate::options::BookletOptions;
use crate::types::*;
use docx_extract::ContentItem;
use printpdf::{PdfDocument, PdfSaveOptions};
use render::render_side;
use std::path::Path;

/// Impose `content` into a booklet PDF at `output_path`
pub async fn generate_booklet(
    content: &[ContentItem],
    output_path: impl AsRef<Path>,
    options: &BookletOptions,
) -> Result<()> {
    let content = content.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || generate_booklet_bytes(&content, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Booklet written to {}", output_path.display());

    Ok(())
}

pub fn generate_booklet_bytes(content: &[ContentItem], options: &BookletOptions) -> Result<Vec<u8>> {
    options.validate()?;

    if content.is_empty() {
        log::warn!("No content to impose, writing a booklet with no pages");
    }

    let geometry = BookletGeometry::new(options);
    let plan = plan_booklet(content.len());
    log::debug!(
        "Imposing {} items onto {} sides, leaf {}x{}mm",
        content.len(),
        plan.len(),
        geometry.leaf_width_mm,
        geometry.leaf_height_mm
    );

    let mut doc = PdfDocument::new("Booklet");
    doc.pages = plan
        .iter()
        .map(|layout| render_side(layout, content, options, &geometry))
        .collect();

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }

    Ok(bytes)
}
