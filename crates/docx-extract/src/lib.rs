mod docx;
mod options;
mod types;

pub use docx::{extract_content, extract_content_sync};
pub use options::{DEFAULT_IMAGE_WIDTH_IN, DEFAULT_TEMP_DIR, ExtractOptions};
pub use types::*;
