//! SVG icons for Roundel controls
//!
//! Loads icons with `usvg`, extracts their paths as Roundel drawing
//! commands, recolors fills and strokes without touching the loaded
//! document, and keeps one rasterized copy per control that is rebuilt
//! whenever size, resolution scale or color overrides change.
//!
//! # Example
//!
//! ```ignore
//! use roundel_svg::{IconRasterCache, IconSource, SvgDocument};
//!
//! let icon = IconSource::Vector(Arc::new(SvgDocument::from_file("play.svg")?));
//! let mut cache = IconRasterCache::new();
//! let bitmap = cache.get_raster(&icon, Size::new(18.0, 18.0), 2.0, Some(Color::WHITE), None);
//! ```

mod cache;
mod document;
mod error;
mod path;
mod raster;
mod recolor;
mod style;

pub use cache::{pixel_size, IconRasterCache, IconSource};
pub use document::{FillRule, SvgDocument, SvgDrawCommand};
pub use error::SvgError;
pub use path::core_path_to_skia;
pub use raster::{
    brush_to_paint, fit_transform, pixmap_to_bitmap, rasterize_commands, rasterize_tree,
    stroke_to_skia, unpremultiply_alpha,
};
pub use recolor::{recolor, ColorOverrides, WorkingCopy};
