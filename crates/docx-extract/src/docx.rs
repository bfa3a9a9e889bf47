//! DOCX content extraction
//!
//! Paragraph text comes first, in body order, followed by every image
//! relationship of the main document part in package order.

use crate::options::ExtractOptions;
use crate::types::*;
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::formatting::CharacterProperty;
use docx_rust::rels::TargetMode;
use docx_rust::styles::StyleType;
use docx_rust::{Docx, DocxFile};
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// Used when styles.xml marks no paragraph style as the default
const FALLBACK_PARAGRAPH_STYLE: &str = "Normal";

/// Relationship targets of the main document part resolve against this
const DOCUMENT_PART_DIR: &str = "word";

/// Extract paragraphs and images from a DOCX file
pub async fn extract_content(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<ContentItem>> {
    let path = path.as_ref().to_owned();
    let options = options.clone();

    // Unzipping and XML parsing are CPU-bound
    tokio::task::spawn_blocking(move || extract_content_sync(&path, &options)).await?
}

pub fn extract_content_sync(path: &Path, options: &ExtractOptions) -> Result<Vec<ContentItem>> {
    options.validate()?;

    let file = DocxFile::from_file(path)
        .map_err(|e| ExtractError::Docx(format!("failed to open {}: {}", path.display(), e)))?;
    let docx = file
        .parse()
        .map_err(|e| ExtractError::Docx(format!("failed to parse {}: {}", path.display(), e)))?;

    if !options.temp_dir.exists() {
        log::debug!("Creating temp image directory {}", options.temp_dir.display());
    }
    fs::create_dir_all(&options.temp_dir)?;

    let mut content = Vec::new();

    for body in &docx.document.body.content {
        let BodyContent::Paragraph(para) = body else {
            continue;
        };

        let text = paragraph_text(para);
        if text.trim().is_empty() {
            continue;
        }

        let style = resolve_style(&docx, para);
        log::debug!("Paragraph {}: {:?}", content.len(), style);
        content.push(ContentItem::Text {
            content: text,
            style,
        });
    }

    let paragraphs = content.len();
    let images = extract_images(path, &docx, options)?;
    content.extend(images);

    log::info!(
        "Extracted {} paragraphs and {} images from {}",
        paragraphs,
        content.len() - paragraphs,
        path.display()
    );

    Ok(content)
}

/// Plain text of a paragraph, including runs nested in hyperlinks
pub(crate) fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for pc in &para.content {
        match pc {
            ParagraphContent::Run(run) => push_run_text(run, &mut text),
            ParagraphContent::Link(link) => {
                if let Some(ref run) = link.content {
                    push_run_text(run, &mut text);
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(run: &Run, text: &mut String) {
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => text.push_str(&t.text),
            RunContent::Break(_) => text.push('\n'),
            RunContent::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
}

/// Formatting declared by the paragraph's own style (no inheritance chain)
pub(crate) fn resolve_style(docx: &Docx, para: &Paragraph) -> TextStyle {
    let style_id = para
        .property
        .as_ref()
        .and_then(|prop| prop.style_id.as_ref())
        .map(|id| &*id.value)
        .unwrap_or_else(|| default_paragraph_style(docx));

    docx.styles
        .styles
        .iter()
        .find(|style| &*style.style_id == style_id)
        .and_then(|style| style.character.as_ref())
        .map(character_style)
        .unwrap_or_default()
}

/// Id of the paragraph style flagged `w:default="1"`
pub(crate) fn default_paragraph_style<'d>(docx: &'d Docx) -> &'d str {
    docx.styles
        .styles
        .iter()
        .find(|style| {
            matches!(style.ty, Some(StyleType::Paragraph)) && style.default == Some(true)
        })
        .map(|style| &*style.style_id)
        .unwrap_or(FALLBACK_PARAGRAPH_STYLE)
}

fn character_style(props: &CharacterProperty) -> TextStyle {
    TextStyle {
        // w:sz is in half-points
        font_size_pt: props.size.as_ref().map(|size| size.value as f32 / 2.0),
        // A bare <w:b/> turns the property on
        bold: props.bold.as_ref().map(|b| b.value != Some(false)),
        italic: props.italics.as_ref().map(|i| i.value != Some(false)),
    }
}

/// Targets of the main document's embedded image relationships, in
/// package order. Linked (external) images have no payload and are skipped.
pub(crate) fn image_relationships<'d>(docx: &'d Docx) -> Vec<&'d str> {
    let Some(rels) = docx.document_rels.as_ref() else {
        return Vec::new();
    };

    rels.relationships
        .iter()
        .filter(|rel| rel.target.contains("image"))
        .filter(|rel| {
            let external = matches!(rel.target_mode, Some(TargetMode::External));
            if external {
                log::warn!("Skipping external image relationship {}", rel.target);
            }
            !external
        })
        .map(|rel| &*rel.target)
        .collect()
}

fn extract_images(path: &Path, docx: &Docx, options: &ExtractOptions) -> Result<Vec<ContentItem>> {
    let targets = image_relationships(docx);
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    // docx.media only holds png/jpeg/bmp, read payloads from the zip instead
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ExtractError::Docx(format!("failed to open {}: {}", path.display(), e)))?;

    let width_pt = options.image_width_pt();
    let mut images = Vec::with_capacity(targets.len());

    for (image_index, target) in targets.into_iter().enumerate() {
        let data = read_part(&mut archive, target)?;

        let image_file = image_path(&options.temp_dir, image_index, target);
        fs::write(&image_file, &data)?;
        log::debug!(
            "Wrote image {} ({} bytes) -> {}",
            target,
            data.len(),
            image_file.display()
        );

        images.push(ContentItem::Image {
            path: image_file,
            width_pt,
        });
    }

    Ok(images)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, target: &str) -> Result<Vec<u8>> {
    let name = part_name(target);
    let mut entry = match archive.by_name(&name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingMedia(target.to_string())),
        Err(e) => return Err(ExtractError::Docx(format!("failed to read {}: {}", name, e))),
    };

    let mut data = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut data)?;
    Ok(data)
}

/// Zip entry name for a relationship target of the main document part.
/// Absolute targets start at the package root; `..` segments are folded.
pub(crate) fn part_name(target: &str) -> String {
    let (base, relative) = match target.strip_prefix('/') {
        Some(absolute) => (None, absolute),
        None => (Some(DOCUMENT_PART_DIR), target),
    };

    let mut segments: Vec<&str> = base.into_iter().collect();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    segments.join("/")
}

/// `image_<n>.<ext>`, numbered by image count so names never depend on
/// how many paragraphs precede the images
fn image_path(temp_dir: &Path, image_index: usize, target: &str) -> PathBuf {
    let extension = Path::new(target)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_else(|| "bin".to_string());
    temp_dir.join(format!("image_{}.{}", image_index, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_uses_counter_and_target_extension() {
        let path = image_path(Path::new("tmp"), 2, "media/image7.jpeg");
        assert_eq!(path, PathBuf::from("tmp").join("image_2.jpeg"));
    }

    #[test]
    fn part_name_resolves_against_document_part() {
        assert_eq!(part_name("media/image1.gif"), "word/media/image1.gif");
        assert_eq!(part_name("/word/media/image2.emf"), "word/media/image2.emf");
        assert_eq!(part_name("../media/image3.png"), "media/image3.png");
        assert_eq!(part_name("./media/./image4.png"), "word/media/image4.png");
    }

    #[test]
    fn image_path_without_extension_falls_back_to_bin() {
        let path = image_path(Path::new("tmp"), 0, "media/image");
        assert_eq!(path, PathBuf::from("tmp").join("image_0.bin"));
    }
}
