//! Roundel Controls
//!
//! Custom-painted controls for a host that owns the window, the event loop
//! and the text engine.
//!
//! # Architecture
//!
//! 1. **State resolution**: interaction flags are snapshotted into a
//!    `VisualState` and mapped to colors by `resolve`. Disabled wins over
//!    pressed, pressed over hovered.
//!
//! 2. **Layered painting**: `ControlRenderer` runs the shadow, body, content
//!    and overlay phases of a `Control` in order. A failing phase is logged
//!    and the rest still paint.
//!
//! 3. **One animation clock**: spinners and sliding thumbs subscribe to a
//!    shared `AnimationScheduler` only while they move.
//!
//! # Example
//!
//! ```ignore
//! use roundel_widgets::prelude::*;
//!
//! let scheduler = AnimationScheduler::new();
//! let theme = Theme::load("theme.toml")?;
//!
//! let mut upload = IconButton::with_config(
//!     scheduler.handle(),
//!     IconButtonConfig::from_theme(&theme).text("Upload"),
//! );
//! upload.set_loading(true);
//!
//! // On every frame
//! let more = scheduler.tick();
//! upload.paint(&mut ctx, &measurer, window_scale);
//! ```

pub mod button;
pub mod combo_box;
pub mod error;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod resolver;
pub mod state;
pub mod tab_strip;
pub mod text;
pub mod text_field;
pub mod theme;
pub mod toggle;

pub use button::{IconButton, IconButtonConfig};
pub use combo_box::{ComboBoxColors, ComboBoxConfig, GlowComboBox};
pub use error::{RenderError, ThemeError};
pub use layout::{
    align_within, layout_content, ContentAlignment, ContentLayout, ContentOptions,
    TextImageRelation,
};
pub use palette::{FillGradient, IconTints, Palette, StateGradients};
pub use renderer::{
    draw_body, draw_focus_outline, draw_loading_overlay, draw_shadow, draw_spinner, Control,
    ControlRenderer, PaintFrame, PaintReport, Phase, ShadowStyle, SpinnerStyle,
};
pub use resolver::{resolve, resolve_icon_tint, resolve_text_color, FocusLayer, ResolvedStyle};
pub use state::{Key, PointerButton, VisualState};
pub use tab_strip::{
    HostCapabilities, TabAction, TabColors, TabHit, TabItem, TabStrip, TabStripConfig,
};
pub use text::{ellipsize, FixedAdvanceMeasurer, TextMeasurer};
pub use text_field::{GlowTextField, TextFieldColors, TextFieldConfig};
pub use theme::Theme;
pub use toggle::{ToggleColors, ToggleConfig, ToggleSwitch};

/// Everything needed to build and paint controls
pub mod prelude {
    pub use crate::{
        ComboBoxConfig, Control, ControlRenderer, FixedAdvanceMeasurer, GlowComboBox,
        GlowTextField, IconButton, IconButtonConfig, Key, PaintReport, PointerButton, TabItem,
        TabStrip, TabStripConfig, TextMeasurer, TextFieldConfig, Theme, ToggleConfig,
        ToggleSwitch,
    };
    pub use roundel_animation::AnimationScheduler;
    pub use roundel_core::{Color, DrawContext, Point, Rect, Size};
    pub use roundel_svg::IconSource;
}
