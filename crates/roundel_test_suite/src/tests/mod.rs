//! Visual test cases organized by control


use crate::runner::TestSuite;
use roundel_svg::{IconSource, SvgDocument};
use std::sync::Arc;

/// Create all test suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        buttons::suite(),
        toggles::suite(),
        text_fields::suite(),
        combo_boxes::suite(),
        tabs::suite(),
        icons::suite(),
    ]
}

/// Gear-like icon with both fills and strokes
pub(crate) const GEAR_SVG: &str = r##"
    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
        <circle cx="12" cy="12" r="8" fill="#3C78FF"/>
        <circle cx="12" cy="12" r="3" fill="#FFFFFF" stroke="#1E3C80" stroke-width="2"/>
        <path d="M12 1 L12 5 M12 19 L12 23 M1 12 L5 12 M19 12 L23 12" stroke="#1E3C80" stroke-width="2"/>
    </svg>
"##;

/// Stroke-only check mark
pub(crate) const CHECK_SVG: &str = r##"
    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
        <path d="M4 12 L10 18 L20 6" fill="none" stroke="#000000" stroke-width="3"/>
    </svg>
"##;

/// Parse an inline icon, logging instead of failing the case
pub(crate) fn inline_icon(svg: &str) -> Option<IconSource> {
    match SvgDocument::from_str(svg) {
        Ok(doc) => Some(IconSource::Vector(Arc::new(doc))),
        Err(e) => {
            tracing::error!("Failed to parse inline icon: {}", e);
            None
        }
    }
}
