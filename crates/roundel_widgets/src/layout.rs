//! Icon and text placement inside a control

use roundel_core::{Point, Rect, Size};

/// How icon and text are arranged when both are shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextImageRelation {
    #[default]
    ImageBeforeText,
    TextBeforeImage,
    ImageAboveText,
    TextAboveImage,
}

/// Nine-way placement of a lone icon or lone text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentAlignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    /// Horizontal factor: 0 left, 0.5 center, 1 right
    fn horizontal(self) -> f32 {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => 0.5,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => 1.0,
        }
    }

    /// Vertical factor: 0 top, 0.5 middle, 1 bottom
    fn vertical(self) -> f32 {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 0.0,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => 0.5,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 1.0,
        }
    }
}

/// Place `size` inside `outer` per `align`
pub fn align_within(outer: Rect, size: Size, align: ContentAlignment) -> Rect {
    Rect::new(
        outer.x() + (outer.width() - size.width) * align.horizontal(),
        outer.y() + (outer.height() - size.height) * align.vertical(),
        size.width,
        size.height,
    )
}

/// Result of content layout; `None` entries are not drawn
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentLayout {
    pub image: Option<Rect>,
    pub text: Option<Rect>,
}

/// Placement options for `layout_content`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentOptions {
    pub relation: TextImageRelation,
    pub spacing: f32,
    pub image_align: ContentAlignment,
    pub text_align: ContentAlignment,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            relation: TextImageRelation::ImageBeforeText,
            spacing: 6.0,
            image_align: ContentAlignment::MiddleLeft,
            text_align: ContentAlignment::MiddleCenter,
        }
    }
}

/// Lay out an optional icon and optional text inside `content`
///
/// With both present the combined block is centered per `relation`. A lone
/// item uses its nine-way alignment.
pub fn layout_content(
    content: Rect,
    image: Option<Size>,
    text: Option<Size>,
    options: &ContentOptions,
) -> ContentLayout {
    let image = image.filter(|s| s.width > 0.0 && s.height > 0.0);
    let spacing = options.spacing.max(0.0);

    match (image, text) {
        (Some(img), Some(txt)) => {
            let center = content.center();
            let (image_rect, text_rect) = match options.relation {
                TextImageRelation::ImageBeforeText => {
                    let start = row_start(content, img.width + spacing + txt.width);
                    let image_rect = centered_y(start, center.y, img);
                    let text_rect = centered_y(image_rect.right() + spacing, center.y, txt);
                    (image_rect, text_rect)
                }
                TextImageRelation::TextBeforeImage => {
                    let start = row_start(content, txt.width + spacing + img.width);
                    let text_rect = centered_y(start, center.y, txt);
                    let image_rect = centered_y(text_rect.right() + spacing, center.y, img);
                    (image_rect, text_rect)
                }
                TextImageRelation::ImageAboveText => {
                    let start = column_start(content, img.height + spacing + txt.height);
                    let image_rect = centered_x(center.x, start, img);
                    let text_rect = centered_x(center.x, image_rect.bottom() + spacing, txt);
                    (image_rect, text_rect)
                }
                TextImageRelation::TextAboveImage => {
                    let start = column_start(content, txt.height + spacing + img.height);
                    let text_rect = centered_x(center.x, start, txt);
                    let image_rect = centered_x(center.x, text_rect.bottom() + spacing, img);
                    (image_rect, text_rect)
                }
            };
            ContentLayout {
                image: Some(image_rect),
                text: Some(text_rect),
            }
        }
        (Some(img), None) => ContentLayout {
            image: Some(align_within(content, img, options.image_align)),
            text: None,
        },
        (None, Some(txt)) => ContentLayout {
            image: None,
            text: Some(align_within(content, txt, options.text_align)),
        },
        (None, None) => ContentLayout::default(),
    }
}

/// Left edge of a centered row; never left of the content
fn row_start(content: Rect, total_width: f32) -> f32 {
    content.x() + ((content.width() - total_width) / 2.0).max(0.0)
}

/// Top edge of a centered column; never above the content
fn column_start(content: Rect, total_height: f32) -> f32 {
    content.y() + ((content.height() - total_height) / 2.0).max(0.0)
}

fn centered_y(x: f32, center_y: f32, size: Size) -> Rect {
    Rect::from_origin_size(Point::new(x, center_y - size.height / 2.0), size)
}

fn centered_x(center_x: f32, y: f32, size: Size) -> Rect {
    Rect::from_origin_size(Point::new(center_x - size.width / 2.0, y), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    const ICON: Size = Size::new(18.0, 18.0);
    const TEXT: Size = Size::new(40.0, 16.0);

    fn with_relation(relation: TextImageRelation) -> ContentOptions {
        ContentOptions {
            relation,
            ..Default::default()
        }
    }

    #[test]
    fn test_image_before_text() {
        let layout = layout_content(
            CONTENT,
            Some(ICON),
            Some(TEXT),
            &with_relation(TextImageRelation::ImageBeforeText),
        );
        // Block is 18 + 6 + 40 = 64 wide, starting at 18
        assert_eq!(layout.image, Some(Rect::new(18.0, 11.0, 18.0, 18.0)));
        assert_eq!(layout.text, Some(Rect::new(42.0, 12.0, 40.0, 16.0)));
    }

    #[test]
    fn test_text_before_image() {
        let layout = layout_content(
            CONTENT,
            Some(ICON),
            Some(TEXT),
            &with_relation(TextImageRelation::TextBeforeImage),
        );
        assert_eq!(layout.text, Some(Rect::new(18.0, 12.0, 40.0, 16.0)));
        assert_eq!(layout.image, Some(Rect::new(64.0, 11.0, 18.0, 18.0)));
    }

    #[test]
    fn test_image_above_text() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let layout = layout_content(
            content,
            Some(ICON),
            Some(TEXT),
            &with_relation(TextImageRelation::ImageAboveText),
        );
        // Block is 18 + 6 + 16 = 40 tall, starting at 30
        assert_eq!(layout.image, Some(Rect::new(41.0, 30.0, 18.0, 18.0)));
        assert_eq!(layout.text, Some(Rect::new(30.0, 54.0, 40.0, 16.0)));
    }

    #[test]
    fn test_text_above_image() {
        let content = Rect::new(0.0, 0.0, 100.0, 100.0);
        let layout = layout_content(
            content,
            Some(ICON),
            Some(TEXT),
            &with_relation(TextImageRelation::TextAboveImage),
        );
        assert_eq!(layout.text, Some(Rect::new(30.0, 30.0, 40.0, 16.0)));
        assert_eq!(layout.image, Some(Rect::new(41.0, 52.0, 18.0, 18.0)));
    }

    #[test]
    fn test_oversized_row_starts_at_content_edge() {
        let layout = layout_content(
            Rect::new(10.0, 0.0, 30.0, 40.0),
            Some(ICON),
            Some(TEXT),
            &ContentOptions::default(),
        );
        assert_eq!(layout.image.map(|r| r.x()), Some(10.0));
    }

    #[test]
    fn test_lone_items_use_alignment() {
        let options = ContentOptions::default();
        let image_only = layout_content(CONTENT, Some(ICON), None, &options);
        assert_eq!(image_only.image, Some(Rect::new(0.0, 11.0, 18.0, 18.0)));
        assert!(image_only.text.is_none());

        let text_only = layout_content(CONTENT, None, Some(TEXT), &options);
        assert_eq!(text_only.text, Some(Rect::new(30.0, 12.0, 40.0, 16.0)));
    }

    #[test]
    fn test_empty_image_is_dropped() {
        let layout = layout_content(CONTENT, Some(Size::ZERO), Some(TEXT), &ContentOptions::default());
        assert!(layout.image.is_none());
        assert!(layout.text.is_some());
    }

    #[test]
    fn test_align_within_corners() {
        let outer = Rect::new(0.0, 0.0, 100.0, 40.0);
        let size = Size::new(10.0, 10.0);
        assert_eq!(
            align_within(outer, size, ContentAlignment::BottomRight),
            Rect::new(90.0, 30.0, 10.0, 10.0)
        );
        assert_eq!(
            align_within(outer, size, ContentAlignment::TopCenter),
            Rect::new(45.0, 0.0, 10.0, 10.0)
        );
    }
}
