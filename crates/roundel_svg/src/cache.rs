//! Per-control icon raster cache
//!
//! Holds one rasterized icon keyed by logical size, resolution scale and
//! color overrides. Any key change forces a synchronous rebuild before the
//! raster is handed out; identical keys hand out the same `Arc`.
//!
//! # Example
//!
//! ```ignore
//! let mut cache = IconRasterCache::new();
//! let source = IconSource::Vector(Arc::new(SvgDocument::from_file("icon.svg")?));
//!
//! // Once per paint
//! if let Some(bitmap) = cache.get_raster(&source, Size::new(18.0, 18.0), 1.5, None, None) {
//!     ctx.draw_bitmap(&bitmap, target, &ImageOptions::new());
//! }
//! ```

use std::sync::Arc;

use roundel_core::{Bitmap, Color, Size};

use crate::document::SvgDocument;
use crate::error::SvgError;
use crate::raster::{rasterize_commands, rasterize_tree};
use crate::recolor::{ColorOverrides, WorkingCopy};

/// Where an icon comes from
#[derive(Clone, Debug)]
pub enum IconSource {
    /// Vector document, rasterized per key
    Vector(Arc<SvgDocument>),
    /// Ready-made bitmap, passed through unchanged
    Bitmap(Arc<Bitmap>),
}

impl IconSource {
    /// Identity comparison: same document or bitmap instance
    pub fn is_same(&self, other: &IconSource) -> bool {
        match (self, other) {
            (IconSource::Vector(a), IconSource::Vector(b)) => Arc::ptr_eq(a, b),
            (IconSource::Bitmap(a), IconSource::Bitmap(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Everything a cached raster depends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    pixel_width: u32,
    pixel_height: u32,
    // Bit patterns so NaN inputs still compare equal to themselves
    logical_width: u32,
    logical_height: u32,
    scale: u32,
    fill: Option<[u32; 4]>,
    stroke: Option<[u32; 4]>,
}

impl CacheKey {
    fn new(pixel: (u32, u32), logical: Size, scale: f32, overrides: &ColorOverrides) -> Self {
        let color_bits = |c: Color| [c.r.to_bits(), c.g.to_bits(), c.b.to_bits(), c.a.to_bits()];
        Self {
            pixel_width: pixel.0,
            pixel_height: pixel.1,
            logical_width: logical.width.to_bits(),
            logical_height: logical.height.to_bits(),
            scale: scale.to_bits(),
            fill: overrides.fill.map(color_bits),
            stroke: overrides.stroke.map(color_bits),
        }
    }
}

/// Device pixel size for a logical size, `round(logical * scale)` per axis
///
/// Non-finite or negative results map to 0.
pub fn pixel_size(logical: Size, scale: f32) -> (u32, u32) {
    let px = |v: f32| {
        let scaled = (v * scale).round();
        if scaled.is_finite() && scaled > 0.0 {
            scaled.min(u32::MAX as f32) as u32
        } else {
            0
        }
    };
    (px(logical.width), px(logical.height))
}

/// Single-entry raster cache owned by one control
#[derive(Debug, Default)]
pub struct IconRasterCache {
    source: Option<Arc<SvgDocument>>,
    working: Option<WorkingCopy>,
    key: Option<CacheKey>,
    /// `None` with a stored key remembers a failed build for that key
    raster: Option<Arc<Bitmap>>,
    rebuilds: u64,
}

impl IconRasterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raster for the current key, rebuilding first if the key changed
    ///
    /// Returns `None` when the icon cannot be rasterized for this key; the
    /// failure is remembered until the key changes.
    pub fn get_raster(
        &mut self,
        source: &IconSource,
        logical: Size,
        scale: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    ) -> Option<Arc<Bitmap>> {
        let document = match source {
            IconSource::Bitmap(bitmap) => return Some(Arc::clone(bitmap)),
            IconSource::Vector(document) => document,
        };

        if !self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, document))
        {
            tracing::debug!("icon source changed, discarding cached raster");
            self.reset();
            self.source = Some(Arc::clone(document));
        }

        let overrides = ColorOverrides::new(fill, stroke);
        let pixel = pixel_size(logical, scale);
        let key = CacheKey::new(pixel, logical, scale, &overrides);
        if self.key == Some(key) {
            return self.raster.clone();
        }

        self.raster = None;
        self.rebuilds += 1;
        tracing::debug!(
            width = pixel.0,
            height = pixel.1,
            scale,
            recolored = !overrides.is_empty(),
            "rebuilding icon raster"
        );

        match self.build(document, pixel, overrides) {
            Ok(bitmap) => self.raster = Some(Arc::new(bitmap)),
            Err(err) => {
                tracing::warn!(error = %err, "icon rasterization failed, drawing without icon");
            }
        }
        self.key = Some(key);
        self.raster.clone()
    }

    fn build(
        &mut self,
        document: &SvgDocument,
        (width, height): (u32, u32),
        overrides: ColorOverrides,
    ) -> Result<Bitmap, SvgError> {
        if overrides.is_empty() {
            self.working = None;
            return rasterize_tree(document.tree(), width, height);
        }

        let stale = self
            .working
            .as_ref()
            .map_or(true, |working| *working.overrides() != overrides);
        if stale {
            self.working = Some(WorkingCopy::derive(document, overrides));
        }

        match &self.working {
            Some(working) => rasterize_commands(document, working.commands(), width, height),
            None => rasterize_tree(document.tree(), width, height),
        }
    }

    /// Drop the stored raster so the next request rebuilds
    pub fn invalidate(&mut self) {
        self.key = None;
        self.raster = None;
    }

    /// Forget the source, working copy and raster
    pub fn reset(&mut self) {
        self.source = None;
        self.working = None;
        self.invalidate();
    }

    /// Number of rasterizations performed so far
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// The raster from the last successful build, if still valid
    pub fn current(&self) -> Option<&Arc<Bitmap>> {
        self.raster.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: &str = r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
            <circle cx="12" cy="12" r="10" fill="white" stroke="black" stroke-width="2"/>
        </svg>
    "#;

    fn vector() -> IconSource {
        IconSource::Vector(Arc::new(SvgDocument::from_str(ICON).unwrap()))
    }

    #[test]
    fn test_same_key_returns_same_instance() {
        let mut cache = IconRasterCache::new();
        let source = vector();
        let logical = Size::new(18.0, 18.0);

        let first = cache.get_raster(&source, logical, 1.0, None, None).unwrap();
        let second = cache.get_raster(&source, logical, 1.0, None, None).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.rebuild_count(), 1);
        assert_eq!(first.dimensions(), (18, 18));
    }

    #[test]
    fn test_scale_change_rebuilds_once() {
        let mut cache = IconRasterCache::new();
        let source = vector();
        let logical = Size::new(18.0, 18.0);

        let at_1x = cache.get_raster(&source, logical, 1.0, None, None).unwrap();
        let at_2x = cache.get_raster(&source, logical, 2.0, None, None).unwrap();
        let again = cache.get_raster(&source, logical, 2.0, None, None).unwrap();

        assert!(!Arc::ptr_eq(&at_1x, &at_2x));
        assert!(Arc::ptr_eq(&at_2x, &again));
        assert_eq!(cache.rebuild_count(), 2);
        assert_eq!(at_2x.dimensions(), (36, 36));
    }

    #[test]
    fn test_pixel_size_rounds() {
        assert_eq!(pixel_size(Size::new(18.0, 18.0), 1.25), (23, 23));
        assert_eq!(pixel_size(Size::new(18.0, 10.0), 1.5), (27, 15));
        assert_eq!(pixel_size(Size::new(0.2, 18.0), 1.0), (0, 18));
        assert_eq!(pixel_size(Size::new(18.0, 18.0), f32::NAN), (0, 0));
    }

    #[test]
    fn test_override_change_rebuilds_and_recolors() {
        let mut cache = IconRasterCache::new();
        let source = vector();
        let logical = Size::new(24.0, 24.0);

        let plain = cache.get_raster(&source, logical, 1.0, None, None).unwrap();
        assert_eq!(plain.pixel(12, 12), Some([255, 255, 255, 255]));

        let red = Color::rgb(1.0, 0.0, 0.0);
        let tinted = cache
            .get_raster(&source, logical, 1.0, Some(red), None)
            .unwrap();
        assert!(!Arc::ptr_eq(&plain, &tinted));
        assert_eq!(tinted.pixel(12, 12), Some([255, 0, 0, 255]));
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_failure_is_memoized() {
        let mut cache = IconRasterCache::new();
        let source = vector();

        assert!(cache
            .get_raster(&source, Size::ZERO, 1.0, None, None)
            .is_none());
        assert!(cache
            .get_raster(&source, Size::ZERO, 1.0, None, None)
            .is_none());
        assert_eq!(cache.rebuild_count(), 1);

        // A valid key recovers
        assert!(cache
            .get_raster(&source, Size::new(16.0, 16.0), 1.0, None, None)
            .is_some());
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_new_document_instance_rebuilds() {
        let mut cache = IconRasterCache::new();
        let logical = Size::new(18.0, 18.0);

        let a = cache.get_raster(&vector(), logical, 1.0, None, None).unwrap();
        let b = cache.get_raster(&vector(), logical, 1.0, None, None).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_bitmap_source_passes_through() {
        let mut cache = IconRasterCache::new();
        let bitmap = Arc::new(Bitmap::transparent(8, 8));
        let source = IconSource::Bitmap(Arc::clone(&bitmap));

        let out = cache
            .get_raster(&source, Size::new(18.0, 18.0), 2.0, Some(Color::BLACK), None)
            .unwrap();
        assert!(Arc::ptr_eq(&out, &bitmap));
        assert_eq!(cache.rebuild_count(), 0);
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let mut cache = IconRasterCache::new();
        let source = vector();
        let logical = Size::new(18.0, 18.0);

        cache.get_raster(&source, logical, 1.0, None, None);
        cache.invalidate();
        assert!(cache.current().is_none());
        cache.get_raster(&source, logical, 1.0, None, None);
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_source_identity() {
        let doc = Arc::new(SvgDocument::from_str(ICON).unwrap());
        let a = IconSource::Vector(Arc::clone(&doc));
        let b = IconSource::Vector(doc);
        assert!(a.is_same(&b));
        assert!(!a.is_same(&vector()));
    }
}
