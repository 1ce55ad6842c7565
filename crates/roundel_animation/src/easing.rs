//! Easing curves for finite animations

/// Maps linear progress `t` in `0.0..=1.0` to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: `1 - (1 - t)^2`
    #[default]
    EaseOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert!(Easing::EaseOut.apply(0.2) > Easing::Linear.apply(0.2));
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
    }
}
