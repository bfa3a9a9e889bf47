//! Layout calculation for booklet imposition
//!
//! - Folio slot ordering (which logical page goes where)
//! - Sheet geometry (leaf size, text anchors)

mod geometry;
mod signature;
mod types;

pub use geometry::*;
pub use signature::*;
pub use types::*;
