//! TOML themes
//!
//! A theme file overrides any subset of the control colors. Colors are
//! `"#RRGGBB"` or `"#RRGGBBAA"` strings; anything not listed keeps the
//! control default.
//!
//! ```toml
//! [button]
//! fill = "#FFFFFF"
//! hover_border = "#1E90FF"
//! border_width = 1.5
//!
//! [toggle]
//! on_track = "#3CB371"
//! hover_track = "#A9A9A9"
//!
//! [combo_box]
//! focused_border = "#32CD32"
//!
//! [tabs]
//! selected_border = "#3C78FF"
//! ```

use std::fs;
use std::path::Path;

use roundel_core::Color;
use serde::Deserialize;

use crate::combo_box::ComboBoxColors;
use crate::error::ThemeError;
use crate::palette::Palette;
use crate::tab_strip::TabColors;
use crate::text_field::TextFieldColors;
use crate::toggle::ToggleColors;

/// Colors for every control
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub button: Palette,
    /// Button spinner color
    pub spinner: Color,
    pub toggle: ToggleColors,
    pub text_field: TextFieldColors,
    pub combo_box: ComboBoxColors,
    pub tabs: TabColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            button: Palette::default(),
            spinner: Color::DODGER_BLUE,
            toggle: ToggleColors::default(),
            text_field: TextFieldColors::default(),
            combo_box: ComboBoxColors::default(),
            tabs: TabColors::default(),
        }
    }
}

impl Theme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        let raw: RawTheme = toml::from_str(text)?;
        raw.into_theme()
    }

    /// Load a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "theme loaded");
        Ok(theme)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTheme {
    button: RawButton,
    toggle: RawToggle,
    text_field: RawTextField,
    combo_box: RawComboBox,
    tabs: RawTabs,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawButton {
    fill: Option<String>,
    hover_fill: Option<String>,
    pressed_fill: Option<String>,
    disabled_fill: Option<String>,
    border: Option<String>,
    hover_border: Option<String>,
    pressed_border: Option<String>,
    disabled_border: Option<String>,
    border_width: Option<f32>,
    focus: Option<String>,
    spinner: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawToggle {
    on_track: Option<String>,
    off_track: Option<String>,
    on_thumb: Option<String>,
    off_thumb: Option<String>,
    thumb_hover_start: Option<String>,
    thumb_hover_end: Option<String>,
    thumb_hover: Option<String>,
    hover_track: Option<String>,
    border: Option<String>,
    focus_glow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTextField {
    fill: Option<String>,
    border: Option<String>,
    hover_border: Option<String>,
    focus_border: Option<String>,
    glow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawComboBox {
    back: Option<String>,
    border: Option<String>,
    focused_border: Option<String>,
    glow: Option<String>,
    text: Option<String>,
    arrow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTabs {
    back: Option<String>,
    hover_back: Option<String>,
    selected_back: Option<String>,
    border: Option<String>,
    selected_border: Option<String>,
    close_hover_back: Option<String>,
    close_hover_fore: Option<String>,
    close_fore: Option<String>,
    add_back: Option<String>,
    add_hover_back: Option<String>,
    add_fore: Option<String>,
}

/// Parse `value` into `target` when present
fn set(target: &mut Color, field: &str, value: &Option<String>) -> Result<(), ThemeError> {
    if let Some(text) = value {
        *target = Color::parse_hex(text).ok_or_else(|| ThemeError::Color {
            field: field.to_string(),
            value: text.clone(),
        })?;
    }
    Ok(())
}

fn set_optional(
    target: &mut Option<Color>,
    field: &str,
    value: &Option<String>,
) -> Result<(), ThemeError> {
    if value.is_some() {
        let mut color = Color::TRANSPARENT;
        set(&mut color, field, value)?;
        *target = Some(color);
    }
    Ok(())
}

impl RawTheme {
    fn into_theme(self) -> Result<Theme, ThemeError> {
        let mut theme = Theme::default();

        let b = &self.button;
        let button = &mut theme.button;
        set(&mut button.fill, "button.fill", &b.fill)?;
        set(&mut button.hover_fill, "button.hover_fill", &b.hover_fill)?;
        set(&mut button.pressed_fill, "button.pressed_fill", &b.pressed_fill)?;
        set_optional(&mut button.disabled_fill, "button.disabled_fill", &b.disabled_fill)?;
        set(&mut button.border, "button.border", &b.border)?;
        set(&mut button.hover_border, "button.hover_border", &b.hover_border)?;
        set(&mut button.pressed_border, "button.pressed_border", &b.pressed_border)?;
        set_optional(
            &mut button.disabled_border,
            "button.disabled_border",
            &b.disabled_border,
        )?;
        set(&mut button.focus, "button.focus", &b.focus)?;
        if let Some(width) = b.border_width {
            button.border_width = width.max(0.0);
        }
        set(&mut theme.spinner, "button.spinner", &b.spinner)?;

        let t = &self.toggle;
        let toggle = &mut theme.toggle;
        set(&mut toggle.on_track, "toggle.on_track", &t.on_track)?;
        set(&mut toggle.off_track, "toggle.off_track", &t.off_track)?;
        set(&mut toggle.on_thumb, "toggle.on_thumb", &t.on_thumb)?;
        set(&mut toggle.off_thumb, "toggle.off_thumb", &t.off_thumb)?;
        set(
            &mut toggle.thumb_hover_start,
            "toggle.thumb_hover_start",
            &t.thumb_hover_start,
        )?;
        set(
            &mut toggle.thumb_hover_end,
            "toggle.thumb_hover_end",
            &t.thumb_hover_end,
        )?;
        set_optional(&mut toggle.thumb_hover, "toggle.thumb_hover", &t.thumb_hover)?;
        set_optional(&mut toggle.hover_track, "toggle.hover_track", &t.hover_track)?;
        set(&mut toggle.border, "toggle.border", &t.border)?;
        set(&mut toggle.focus_glow, "toggle.focus_glow", &t.focus_glow)?;

        let f = &self.text_field;
        let field = &mut theme.text_field;
        set(&mut field.fill, "text_field.fill", &f.fill)?;
        set(&mut field.border, "text_field.border", &f.border)?;
        set(&mut field.hover_border, "text_field.hover_border", &f.hover_border)?;
        set(&mut field.focus_border, "text_field.focus_border", &f.focus_border)?;
        set(&mut field.glow, "text_field.glow", &f.glow)?;

        let k = &self.combo_box;
        let combo = &mut theme.combo_box;
        set(&mut combo.back, "combo_box.back", &k.back)?;
        set(&mut combo.border, "combo_box.border", &k.border)?;
        set(&mut combo.focused_border, "combo_box.focused_border", &k.focused_border)?;
        set(&mut combo.glow, "combo_box.glow", &k.glow)?;
        set(&mut combo.text, "combo_box.text", &k.text)?;
        set(&mut combo.arrow, "combo_box.arrow", &k.arrow)?;

        let c = &self.tabs;
        let tabs = &mut theme.tabs;
        set(&mut tabs.back, "tabs.back", &c.back)?;
        set(&mut tabs.hover_back, "tabs.hover_back", &c.hover_back)?;
        set(&mut tabs.selected_back, "tabs.selected_back", &c.selected_back)?;
        set(&mut tabs.border, "tabs.border", &c.border)?;
        set(&mut tabs.selected_border, "tabs.selected_border", &c.selected_border)?;
        set(&mut tabs.close_hover_back, "tabs.close_hover_back", &c.close_hover_back)?;
        set(&mut tabs.close_hover_fore, "tabs.close_hover_fore", &c.close_hover_fore)?;
        set(&mut tabs.close_fore, "tabs.close_fore", &c.close_fore)?;
        set(&mut tabs.add_back, "tabs.add_back", &c.add_back)?;
        set(&mut tabs.add_hover_back, "tabs.add_hover_back", &c.add_hover_back)?;
        set(&mut tabs.add_fore, "tabs.add_fore", &c.add_fore)?;

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_is_default() {
        assert_eq!(Theme::from_toml_str("").unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_toml_str(
            r##"
            [button]
            fill = "#102030"
            focus = "#1E90FF78"
            border_width = 2.0
            spinner = "#FF0000"

            [tabs]
            selected_border = "#000000"
            "##,
        )
        .unwrap();

        assert_eq!(theme.button.fill, Color::from_rgba8(0x10, 0x20, 0x30, 255));
        assert_eq!(theme.button.focus.to_rgba8(), [0x1E, 0x90, 0xFF, 0x78]);
        assert_eq!(theme.button.border_width, 2.0);
        assert_eq!(theme.spinner, Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(theme.tabs.selected_border, Color::BLACK);
        // Untouched fields keep defaults
        assert_eq!(theme.button.hover_fill, Palette::default().hover_fill);
        assert_eq!(theme.toggle, ToggleColors::default());
    }

    #[test]
    fn test_disabled_colors_become_explicit() {
        let theme = Theme::from_toml_str("[button]\ndisabled_fill = \"#EEEEEE\"\n").unwrap();
        assert_eq!(
            theme.button.disabled_fill,
            Some(Color::from_rgba8(0xEE, 0xEE, 0xEE, 255))
        );
        assert_eq!(theme.button.disabled_border, None);
    }

    #[test]
    fn test_toggle_hover_colors() {
        let theme = Theme::from_toml_str(
            "[toggle]\nhover_track = \"#A9A9A9\"\nborder = \"#FF0000\"\n",
        )
        .unwrap();
        assert_eq!(
            theme.toggle.hover_track.map(|c| c.to_rgba8()),
            Some([0xA9, 0xA9, 0xA9, 255])
        );
        assert_eq!(theme.toggle.thumb_hover, None);
        assert_eq!(theme.toggle.border, Color::from_rgba8(255, 0, 0, 255));
    }

    #[test]
    fn test_combo_box_section() {
        let theme = Theme::from_toml_str("[combo_box]\nglow = \"#0000FF\"\n").unwrap();
        assert_eq!(theme.combo_box.glow, Color::from_rgba8(0, 0, 255, 255));
        assert_eq!(theme.combo_box.back, ComboBoxColors::default().back);

        let err = Theme::from_toml_str("[combo_box]\nglow_color = \"#0000FF\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn test_bad_color_names_field() {
        let err = Theme::from_toml_str("[toggle]\non_track = \"green\"\n").unwrap_err();
        match err {
            ThemeError::Color { field, value } => {
                assert_eq!(field, "toggle.on_track");
                assert_eq!(value, "green");
            }
            other => panic!("expected color error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Theme::from_toml_str("[button]\nfil = \"#FFFFFF\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("roundel-theme-{}.toml", std::process::id()));
        fs::write(&path, "[text_field]\nglow = \"#00FF00\"\n").unwrap();
        let theme = Theme::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(theme.text_field.glow, Color::from_rgba8(0, 255, 0, 255));
    }

    #[test]
    fn test_missing_file() {
        let err = Theme::load("/nonexistent/roundel/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
