use crate::types::{ExtractError, Result};
use std::path::PathBuf;

/// Default directory for extracted image payloads
pub const DEFAULT_TEMP_DIR: &str = "temp_images";

/// Default display width assigned to image items, in inches
pub const DEFAULT_IMAGE_WIDTH_IN: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOptions {
    /// Where image payloads are written. Created if absent, never cleaned up.
    pub temp_dir: PathBuf,
    /// Display width recorded on every image item
    pub image_width_in: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            image_width_in: DEFAULT_IMAGE_WIDTH_IN,
        }
    }
}

impl ExtractOptions {
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
            ..Default::default()
        }
    }

    /// Image width in PDF points
    pub fn image_width_pt(&self) -> f32 {
        self.image_width_in * 72.0
    }

    pub fn validate(&self) -> Result<()> {
        if self.temp_dir.as_os_str().is_empty() {
            return Err(ExtractError::Config(
                "Temp image directory must not be empty".to_string(),
            ));
        }
        if self.image_width_in.is_nan() || self.image_width_in <= 0.0 {
            return Err(ExtractError::Config(format!(
                "Image width must be positive, got {}",
                self.image_width_in
            )));
        }
        Ok(())
    }
}
