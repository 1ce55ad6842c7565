//! Roundel Visual Test Suite
//!
//! Headless visual regression tests for the Roundel controls. Each case
//! paints controls into a `PaintContext`, the recorded commands are
//! rasterized on the CPU with tiny-skia, and the PNG is compared to a
//! reference image.
//!
//! # Test Categories
//!
//! - **buttons**: icon buttons across states, layouts, gradients and loading
//! - **toggles**: switch tracks, thumbs and focus glow
//! - **text_fields**: glow borders
//! - **combo_boxes**: focus glow, ellipsized items
//! - **tabs**: tab strips with close and add buttons
//! - **icons**: recolored and scaled vector icons

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
pub use runner::TestRunner;
