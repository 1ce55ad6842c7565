//! Visual state snapshot
//!
//! Controls copy their flags into a `VisualState` at the start of every paint
//! so every phase sees the same state.

/// Interaction flags a control is painted with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualState {
    pub enabled: bool,
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub loading: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            enabled: true,
            hovered: false,
            pressed: false,
            focused: false,
            loading: false,
        }
    }
}

impl VisualState {
    /// Enabled, idle, unfocused
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input vocabulary delivered by the host
// ─────────────────────────────────────────────────────────────────────────────

/// Keys controls react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Other,
}

impl Key {
    /// Space or Enter
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// Pointer button of a press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled_idle() {
        let state = VisualState::new();
        assert!(state.enabled);
        assert!(!state.is_disabled());
        assert!(!state.hovered && !state.pressed && !state.focused && !state.loading);
    }

    #[test]
    fn test_builders() {
        let state = VisualState::new()
            .with_hovered(true)
            .with_pressed(true)
            .with_enabled(false);
        assert!(state.hovered);
        assert!(state.pressed);
        assert!(state.is_disabled());
    }
}
