//! Text measurement seam
//!
//! Font metrics belong to the host. Controls only ask for the size of a
//! string in a style, and treat a failed measurement as "no text".

use roundel_core::{Size, TextStyle};

use crate::error::RenderError;

/// Host-provided text metrics
pub trait TextMeasurer {
    /// Size of the line box `text` occupies in `style`
    fn measure(&self, text: &str, style: &TextStyle) -> Result<Size, RenderError>;
}

/// Measurer with a fixed advance per character
///
/// Width is `chars * size * advance`, height is `size * line_height`, both
/// rounded up to whole pixels. Used by headless rendering and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.25,
        }
    }
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Result<Size, RenderError> {
        if !(style.size.is_finite() && style.size > 0.0) {
            return Err(RenderError::Measure(format!(
                "invalid font size {}",
                style.size
            )));
        }
        let chars = text.chars().count() as f32;
        Ok(Size::new(
            (chars * style.size * self.advance).ceil(),
            (style.size * self.line_height).ceil(),
        ))
    }
}

/// Shorten `text` with a trailing ellipsis until it fits `max_width`
///
/// Returns the text unchanged when it already fits, and an empty string when
/// not even the ellipsis fits.
pub fn ellipsize(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f32,
) -> Result<String, RenderError> {
    if measurer.measure(text, style)?.width <= max_width {
        return Ok(text.to_string());
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().chain(std::iter::once(&'…')).collect();
        if measurer.measure(&candidate, style)?.width <= max_width {
            return Ok(candidate);
        }
    }
    Ok(String::new())
}
