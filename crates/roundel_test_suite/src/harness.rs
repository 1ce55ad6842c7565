//! Test harness for visual tests
//!
//! Provides infrastructure for running visual tests, including:
//! - Recording controls into a `PaintContext`
//! - CPU rasterization of the recorded commands with tiny-skia
//! - PNG output and reference image comparison
//!
//! There is no font engine here: text is drawn as one block per character
//! using the same fixed-advance metrics the controls were laid out with.

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use roundel_animation::AnimationScheduler;
use roundel_core::{Bitmap, Color, DrawCommand, ImageOptions, Rect, Size, TextStyle};
use roundel_paint::PaintContext;
use roundel_svg::{brush_to_paint, core_path_to_skia, stroke_to_skia, unpremultiply_alpha};
use roundel_widgets::{FixedAdvanceMeasurer, TextMeasurer};
use std::path::PathBuf;
use tiny_skia::{FillRule, IntSize, Pixmap, PixmapPaint, Transform};

/// Result of a visual test
#[derive(Debug)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test passed but reference image was created
    PassedWithNewReference,
    /// Test failed with difference ratio
    Failed { difference: f32, diff_path: PathBuf },
    /// Test skipped
    Skipped { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// Context for a single test
pub struct TestContext {
    /// Paint context the controls draw into
    pub paint_ctx: PaintContext,
    /// Animation clock shared by the controls of this test
    pub scheduler: AnimationScheduler,
    /// Text metrics for layout and for the glyph blocks
    pub measurer: FixedAdvanceMeasurer,
    /// Viewport size in logical pixels
    pub size: Size,
    /// Device pixels per logical pixel
    pub scale: f32,
    /// Test name
    pub name: String,
}

impl TestContext {
    pub fn new(name: &str, width: f32, height: f32, scale: f32) -> Self {
        Self {
            paint_ctx: PaintContext::from_size(Size::new(width, height)),
            scheduler: AnimationScheduler::new(),
            measurer: FixedAdvanceMeasurer::default(),
            size: Size::new(width, height),
            scale,
            name: name.to_string(),
        }
    }

    /// Get the paint context
    pub fn ctx(&mut self) -> &mut PaintContext {
        &mut self.paint_ctx
    }

    /// Advance the shared scheduler `n` times
    pub fn tick(&self, n: usize) {
        for _ in 0..n {
            self.scheduler.tick();
        }
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.paint_ctx.take_commands()
    }
}

/// Test harness for running visual tests
pub struct TestHarness {
    /// Output directory for test results
    output_dir: PathBuf,
    /// Reference image directory
    reference_dir: PathBuf,
    /// Default viewport size
    default_size: Size,
    /// Device scale for rendering
    scale: f32,
    /// Difference threshold for visual comparison (0.0-1.0)
    threshold: f32,
    /// Canvas color behind the controls
    background: Color,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TestHarnessConfig::default())
    }

    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;

        Ok(Self {
            output_dir: config.output_dir,
            reference_dir: config.reference_dir,
            default_size: config.default_size,
            scale: config.scale,
            threshold: config.threshold,
            background: config.background,
        })
    }

    /// Create a test context with default size
    pub fn create_context(&self, name: &str) -> TestContext {
        TestContext::new(
            name,
            self.default_size.width,
            self.default_size.height,
            self.scale,
        )
    }

    /// Rasterize recorded commands into an image of `size * scale` pixels
    pub fn rasterize(
        commands: &[DrawCommand],
        size: Size,
        scale: f32,
        background: Color,
        measurer: &dyn TextMeasurer,
    ) -> Result<RgbaImage> {
        let width = (size.width * scale).round().max(1.0) as u32;
        let height = (size.height * scale).round().max(1.0) as u32;
        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("Failed to allocate {width}x{height} pixmap"))?;
        let [r, g, b, a] = background.to_rgba8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

        let transform = Transform::from_scale(scale, scale);
        let mut opacity_stack = vec![1.0_f32];

        for command in commands {
            let opacity = opacity_stack.last().copied().unwrap_or(1.0);
            match command {
                DrawCommand::PushOpacity(value) => opacity_stack.push(opacity * value),
                DrawCommand::PopOpacity => {
                    if opacity_stack.len() > 1 {
                        opacity_stack.pop();
                    }
                }
                DrawCommand::FillPath { path, brush } => {
                    if let Some(path) = core_path_to_skia(path) {
                        let paint = brush_to_paint(brush, opacity);
                        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
                    }
                }
                DrawCommand::StrokePath {
                    path,
                    stroke,
                    brush,
                } => {
                    if let Some(path) = core_path_to_skia(path) {
                        let paint = brush_to_paint(brush, opacity);
                        pixmap.stroke_path(&path, &paint, &stroke_to_skia(stroke), transform, None);
                    }
                }
                DrawCommand::DrawText {
                    text,
                    origin,
                    style,
                } => {
                    draw_glyph_blocks(&mut pixmap, text, *origin, style, opacity, measurer, transform);
                }
                DrawCommand::DrawBitmap {
                    bitmap,
                    rect,
                    options,
                } => {
                    draw_bitmap(&mut pixmap, bitmap, *rect, options, opacity, transform);
                }
            }
        }

        RgbaImage::from_raw(width, height, unpremultiply_alpha(pixmap.data()))
            .context("Pixmap size does not match image size")
    }

    /// Compare two images and return the difference ratio (0.0 = identical, 1.0 = completely different)
    pub fn compare_images(img1: &RgbaImage, img2: &RgbaImage) -> f32 {
        if img1.dimensions() != img2.dimensions() {
            return 1.0;
        }

        let (width, height) = img1.dimensions();
        let total_pixels = (width * height) as f64;
        let mut diff_sum = 0.0;

        for (p1, p2) in img1.pixels().zip(img2.pixels()) {
            let channel = |i: usize| (p1[i] as f64 - p2[i] as f64).abs() / 255.0;
            diff_sum += (channel(0) + channel(1) + channel(2) + channel(3)) / 4.0;
        }

        (diff_sum / total_pixels) as f32
    }

    /// Generate a diff image highlighting differences between two images
    pub fn generate_diff_image(img1: &RgbaImage, img2: &RgbaImage) -> Option<RgbaImage> {
        if img1.dimensions() != img2.dimensions() {
            return None;
        }

        let (width, height) = img1.dimensions();
        let mut diff = ImageBuffer::new(width, height);

        for (x, y, p1) in img1.enumerate_pixels() {
            let p2 = img2.get_pixel(x, y);
            let max_diff = (0..3)
                .map(|i| (p1[i] as i32 - p2[i] as i32).abs())
                .max()
                .unwrap_or(0);

            if max_diff > 2 {
                diff.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            } else {
                diff.put_pixel(x, y, Rgba([p1[0] / 3, p1[1] / 3, p1[2] / 3, 128]));
            }
        }

        Some(diff)
    }

    /// Run a test and save output as PNG
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext),
    {
        let mut ctx = self.create_context(name);
        test_fn(&mut ctx);

        let commands = ctx.take_commands();
        tracing::info!("Test '{}': {} draw commands", name, commands.len());

        let output_img = Self::rasterize(
            &commands,
            ctx.size,
            ctx.scale,
            self.background,
            &ctx.measurer,
        )?;
        let output_path = self.output_path(name);
        output_img
            .save(&output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        tracing::info!("Rendered test '{}' to {:?}", name, output_path);

        let reference_path = self.reference_path(name);
        if !reference_path.exists() {
            std::fs::copy(&output_path, &reference_path)
                .context("Failed to create reference image")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            return Ok(TestResult::PassedWithNewReference);
        }

        let reference_img = image::open(&reference_path)
            .context("Failed to open reference image")?
            .to_rgba8();
        let difference = Self::compare_images(&output_img, &reference_img);

        if difference <= self.threshold {
            tracing::info!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
            Ok(TestResult::Passed)
        } else {
            let diff_path = self.diff_path(name);
            if let Some(diff_img) = Self::generate_diff_image(&output_img, &reference_img) {
                if let Err(e) = diff_img.save(&diff_path) {
                    tracing::warn!("Failed to write diff image for '{}': {}", name, e);
                }
            }
            tracing::warn!(
                "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
                name,
                difference * 100.0,
                self.threshold * 100.0
            );
            Ok(TestResult::Failed {
                difference,
                diff_path,
            })
        }
    }

    /// Get the reference image path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.reference_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the output image path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the diff image path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_diff.png", file_stem(name)))
    }
}

/// `suite::case` names become `suite__case` file names
fn file_stem(name: &str) -> String {
    name.replace("::", "__")
}

/// One translucent block per character, sized by the measurer
fn draw_glyph_blocks(
    pixmap: &mut Pixmap,
    text: &str,
    origin: roundel_core::Point,
    style: &TextStyle,
    opacity: f32,
    measurer: &dyn TextMeasurer,
    transform: Transform,
) {
    let Ok(line) = measurer.measure(text, style) else {
        return;
    };
    let count = text.chars().count();
    if count == 0 {
        return;
    }
    let advance = line.width / count as f32;
    let paint = brush_to_paint(&style.color.into(), opacity * 0.7);
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let x = origin.x + i as f32 * advance + advance * 0.1;
        let y = origin.y + line.height * 0.2;
        if let Some(rect) =
            tiny_skia::Rect::from_xywh(x, y, advance * 0.8, line.height * 0.6)
        {
            pixmap.fill_rect(rect, &paint, transform, None);
        }
    }
}

/// Blit a straight-alpha bitmap scaled into `rect`, applying tint and opacity
fn draw_bitmap(
    pixmap: &mut Pixmap,
    bitmap: &Bitmap,
    rect: Rect,
    options: &ImageOptions,
    opacity: f32,
    transform: Transform,
) {
    let (width, height) = bitmap.dimensions();
    let Some(size) = IntSize::from_wh(width, height) else {
        return;
    };
    let tint = options.tint.map(|c| c.to_array()).unwrap_or([1.0; 4]);
    let premultiplied: Vec<u8> = bitmap
        .pixels()
        .chunks_exact(4)
        .flat_map(|px| {
            let a = px[3] as f32 / 255.0 * tint[3];
            let channel = |i: usize| (px[i] as f32 * tint[i] * a).round().min(255.0) as u8;
            [channel(0), channel(1), channel(2), (a * 255.0).round() as u8]
        })
        .collect();
    let Some(source) = Pixmap::from_vec(premultiplied, size) else {
        return;
    };

    let placement = Transform::from_row(
        rect.width() / width as f32,
        0.0,
        0.0,
        rect.height() / height as f32,
        rect.x(),
        rect.y(),
    )
    .post_concat(transform);
    let paint = PixmapPaint {
        opacity: (options.opacity * opacity).clamp(0.0, 1.0),
        quality: tiny_skia::FilterQuality::Bilinear,
        ..Default::default()
    };
    pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, placement, None);
}

/// Configuration for test harness
#[derive(Debug, Clone)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference image directory
    pub reference_dir: PathBuf,
    /// Default viewport size
    pub default_size: Size,
    /// Device scale for rendering
    pub scale: f32,
    /// Difference threshold for visual comparison (0.0-1.0)
    pub threshold: f32,
    /// Canvas color behind the controls
    pub background: Color,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            default_size: Size::new(400.0, 200.0),
            scale: 2.0,
            threshold: 0.001,
            background: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundel_core::DrawContext;
    use std::sync::Arc;

    fn temp_config(tag: &str) -> TestHarnessConfig {
        let root = std::env::temp_dir().join(format!(
            "roundel-harness-{}-{}",
            tag,
            std::process::id()
        ));
        TestHarnessConfig {
            output_dir: root.clone(),
            reference_dir: root.join("references"),
            default_size: Size::new(40.0, 20.0),
            scale: 1.0,
            ..Default::default()
        }
    }

    fn pixel(img: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
        img.get_pixel(x, y).0
    }

    #[test]
    fn test_rasterize_fill_and_background() {
        let mut ctx = PaintContext::new(40.0, 20.0);
        ctx.fill_rect_xywh(0.0, 0.0, 20.0, 20.0, Color::from_rgba8(255, 0, 0, 255));
        let img = TestHarness::rasterize(
            &ctx.take_commands(),
            Size::new(40.0, 20.0),
            1.0,
            Color::WHITE,
            &FixedAdvanceMeasurer::default(),
        )
        .unwrap();

        assert_eq!(img.dimensions(), (40, 20));
        assert_eq!(pixel(&img, 10, 10), [255, 0, 0, 255]);
        assert_eq!(pixel(&img, 30, 10), [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_applies_scale() {
        let mut ctx = PaintContext::new(10.0, 10.0);
        ctx.fill_rect_xywh(5.0, 0.0, 5.0, 10.0, Color::BLACK);
        let img = TestHarness::rasterize(
            &ctx.take_commands(),
            Size::new(10.0, 10.0),
            2.0,
            Color::WHITE,
            &FixedAdvanceMeasurer::default(),
        )
        .unwrap();

        assert_eq!(img.dimensions(), (20, 20));
        assert_eq!(pixel(&img, 15, 10), [0, 0, 0, 255]);
        assert_eq!(pixel(&img, 5, 10), [255, 255, 255, 255]);
    }

    #[test]
    fn test_rasterize_opacity_stack() {
        let mut ctx = PaintContext::new(10.0, 10.0);
        ctx.push_opacity(0.5);
        ctx.fill_rect_xywh(0.0, 0.0, 10.0, 10.0, Color::BLACK);
        ctx.pop_opacity();
        let img = TestHarness::rasterize(
            &ctx.take_commands(),
            Size::new(10.0, 10.0),
            1.0,
            Color::WHITE,
            &FixedAdvanceMeasurer::default(),
        )
        .unwrap();

        let [r, _, _, a] = pixel(&img, 5, 5);
        assert_eq!(a, 255);
        assert!((120..=135).contains(&r), "got {r}");
    }

    #[test]
    fn test_rasterize_tinted_bitmap() {
        let white = Bitmap::new(2, 2, vec![255; 16]).unwrap();
        let mut ctx = PaintContext::new(10.0, 10.0);
        ctx.draw_bitmap(
            &Arc::new(white),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            &ImageOptions::new().with_tint(Color::from_rgba8(0, 0, 255, 255)),
        );
        let img = TestHarness::rasterize(
            &ctx.take_commands(),
            Size::new(10.0, 10.0),
            1.0,
            Color::WHITE,
            &FixedAdvanceMeasurer::default(),
        )
        .unwrap();

        let [r, g, b, a] = pixel(&img, 5, 5);
        assert!(r <= 2 && g <= 2, "got {r},{g}");
        assert!(b >= 253 && a == 255, "got {b},{a}");
    }

    #[test]
    fn test_text_draws_blocks() {
        let mut ctx = PaintContext::new(60.0, 20.0);
        ctx.draw_text_simple("AB", 0.0, 0.0, 10.0, Color::BLACK);
        let img = TestHarness::rasterize(
            &ctx.take_commands(),
            Size::new(60.0, 20.0),
            1.0,
            Color::WHITE,
            &FixedAdvanceMeasurer::default(),
        )
        .unwrap();

        // Center of the first block is darkened, far right stays white
        assert!(pixel(&img, 3, 6)[0] < 255);
        assert_eq!(pixel(&img, 50, 6), [255, 255, 255, 255]);
    }

    #[test]
    fn test_compare_images() {
        let a = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let b = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        assert_eq!(TestHarness::compare_images(&a, &a), 0.0);
        assert!((TestHarness::compare_images(&a, &b) - 0.75).abs() < 1e-6);
        assert_eq!(
            TestHarness::compare_images(&a, &RgbaImage::new(2, 2)),
            1.0
        );
        assert!(TestHarness::generate_diff_image(&a, &RgbaImage::new(2, 2)).is_none());
    }

    #[test]
    fn test_run_creates_then_matches_reference() {
        let config = temp_config("reference");
        let root = config.output_dir.clone();
        let harness = TestHarness::with_config(config).unwrap();

        let draw = |ctx: &mut TestContext| {
            ctx.ctx()
                .fill_circle_xyr(20.0, 10.0, 8.0, Color::DODGER_BLUE);
        };
        let first = harness.run_test("harness::circle", draw).unwrap();
        assert!(matches!(first, TestResult::PassedWithNewReference));
        assert!(harness.reference_path("harness::circle").exists());

        let second = harness.run_test("harness::circle", draw).unwrap();
        assert!(matches!(second, TestResult::Passed));

        let changed = harness
            .run_test("harness::circle", |ctx| {
                ctx.ctx()
                    .fill_rect_xywh(0.0, 0.0, 40.0, 20.0, Color::BLACK);
                ctx.ctx().draw_text_simple("x", 0.0, 0.0, 10.0, Color::WHITE);
            })
            .unwrap();
        assert!(matches!(changed, TestResult::Failed { .. }));
        assert!(harness.diff_path("harness::circle").exists());

        std::fs::remove_dir_all(root).ok();
    }
}
