use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("DOCX error: {0}")]
    Docx(String),
    #[error("Image relationship has no payload in the package: {0}")]
    MissingMedia(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Character formatting declared on a paragraph's style.
///
/// `None` means the style leaves the attribute unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub font_size_pt: Option<f32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

/// One unit of extracted document content, in document order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ContentItem {
    /// A non-empty paragraph
    Text { content: String, style: TextStyle },
    /// An image written out to the temp directory
    Image { path: PathBuf, width_pt: f32 },
}

impl ContentItem {
    pub fn is_text(&self) -> bool {
        matches!(self, ContentItem::Text { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentItem::Image { .. })
    }

    /// Short printable form: the first `max_chars` characters of a paragraph,
    /// or a bracketed file name for an image.
    pub fn snippet(&self, max_chars: usize) -> String {
        match self {
            ContentItem::Text { content, .. } => content.chars().take(max_chars).collect(),
            ContentItem::Image { path, .. } => format!("[image {}]", file_label(path)),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Item counts per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentSummary {
    pub text_items: usize,
    pub image_items: usize,
}

impl ContentSummary {
    pub fn total(&self) -> usize {
        self.text_items + self.image_items
    }
}

pub fn summarize(content: &[ContentItem]) -> ContentSummary {
    content
        .iter()
        .fold(ContentSummary::default(), |mut summary, item| {
            match item {
                ContentItem::Text { .. } => summary.text_items += 1,
                ContentItem::Image { .. } => summary.image_items += 1,
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let item = ContentItem::Text {
            content: "小册子拼版处理脚本说明文档第一章节内容概述与目标读者".to_string(),
            style: TextStyle::default(),
        };
        assert_eq!(item.snippet(20).chars().count(), 20);
    }

    #[test]
    fn snippet_of_short_text_is_whole_text() {
        let item = ContentItem::Text {
            content: "A".to_string(),
            style: TextStyle::default(),
        };
        assert_eq!(item.snippet(20), "A");
    }

    #[test]
    fn image_snippet_uses_file_name() {
        let item = ContentItem::Image {
            path: PathBuf::from("temp_images/image_0.png"),
            width_pt: 288.0,
        };
        assert_eq!(item.snippet(20), "[image image_0.png]");
        assert!(item.is_image());
        assert!(!item.is_text());
    }
}
